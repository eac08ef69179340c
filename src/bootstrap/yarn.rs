use super::PackageManager;

pub struct Yarn;

impl PackageManager for Yarn {
    fn name(&self) -> &'static str {
        "yarn"
    }

    fn init_args(&self) -> Vec<String> {
        vec!["init".into(), "-y".into()]
    }

    fn install_args(&self, dependencies: &[String]) -> Vec<String> {
        let mut args = vec!["add".to_string(), "--dev".to_string()];
        args.extend(dependencies.iter().cloned());
        args
    }

    fn dev_command(&self) -> String {
        "yarn vite".to_string()
    }
}
