use super::PackageManager;

pub struct Pnpm;

impl PackageManager for Pnpm {
    fn name(&self) -> &'static str {
        "pnpm"
    }

    // pnpm init never prompts
    fn init_args(&self) -> Vec<String> {
        vec!["init".into()]
    }

    fn install_args(&self, dependencies: &[String]) -> Vec<String> {
        let mut args = vec!["add".to_string(), "-D".to_string()];
        args.extend(dependencies.iter().cloned());
        args
    }

    fn dev_command(&self) -> String {
        "pnpm exec vite".to_string()
    }
}
