use super::PackageManager;

pub struct Npm;

impl PackageManager for Npm {
    fn name(&self) -> &'static str {
        "npm"
    }

    fn init_args(&self) -> Vec<String> {
        vec!["init".into(), "-y".into()]
    }

    fn install_args(&self, dependencies: &[String]) -> Vec<String> {
        let mut args = vec!["install".to_string(), "--save-dev".to_string()];
        args.extend(dependencies.iter().cloned());
        args
    }

    fn dev_command(&self) -> String {
        "npx vite".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_args() {
        let args = Npm.install_args(&["vite".to_string(), "sass".to_string()]);
        assert_eq!(args, vec!["install", "--save-dev", "vite", "sass"]);
    }
}
