pub mod kubernetes_prompt;
pub mod terraform_prompt;

use crate::Dialect;
use kubernetes_prompt::KubernetesPrompt;
use terraform_prompt::TerraformPrompt;

/// Builds the full completion prompt for a dialect. Pure function of its
/// inputs and the two baked-in instruction blocks; an empty request is
/// composed as-is, the host owns that validation.
pub fn compose(dialect: Dialect, user_request: &str) -> String {
    match dialect {
        Dialect::Terraform => TerraformPrompt::get_prompt(user_request),
        Dialect::Kubernetes => KubernetesPrompt::get_prompt(user_request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terraform_selects_the_terraform_persona() {
        let prompt = compose(Dialect::Terraform, "an ec2 instance for batch jobs");
        assert!(prompt.contains("Terraform specialist"));
        assert!(!prompt.contains("Kubernetes administrator"));
    }

    #[test]
    fn kubernetes_selects_the_kubernetes_persona() {
        let prompt = compose(Dialect::Kubernetes, "nginx deployment with 2 replicas");
        assert!(prompt.contains("Kubernetes administrator"));
        assert!(!prompt.contains("Terraform specialist"));
    }

    #[test]
    fn composed_prompt_contains_the_user_request() {
        for dialect in [Dialect::Terraform, Dialect::Kubernetes] {
            let prompt = compose(dialect, "nginx deployment with 2 replicas");
            assert!(prompt.contains("nginx deployment with 2 replicas"));
            assert!(prompt.contains("User Request:"));
        }
    }

    #[test]
    fn instruction_blocks_keep_the_single_code_block_constraint() {
        for dialect in [Dialect::Terraform, Dialect::Kubernetes] {
            let prompt = compose(dialect, "");
            assert!(prompt.contains("single code block"));
        }
    }
}
