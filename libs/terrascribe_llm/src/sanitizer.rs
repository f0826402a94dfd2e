/// Fence markers the model is known to emit around generated code. Tagged
/// markers come before the bare fence so the tag text never survives.
const FENCE_MARKERS: [&str; 4] = ["```terraform", "```hcl", "```yaml", "```"];

/// Removes every occurrence of the known fence markers anywhere in the text,
/// then trims surrounding whitespace. Idempotent.
pub fn strip_code_fences(text: &str) -> String {
    let mut cleaned = text.to_string();
    for marker in FENCE_MARKERS {
        cleaned = cleaned.replace(marker, "");
    }

    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_every_known_fence_tag() {
        for tag in ["", "terraform", "hcl", "yaml"] {
            let wrapped = format!("```{}\nresource \"aws_s3_bucket\" \"logs\" {{}}\n```", tag);
            assert_eq!(
                strip_code_fences(&wrapped),
                "resource \"aws_s3_bucket\" \"logs\" {}"
            );
        }
    }

    #[test]
    fn strips_yaml_fence() {
        let wrapped = "```yaml\napiVersion: apps/v1\nkind: Deployment\n```";
        assert_eq!(
            strip_code_fences(wrapped),
            "apiVersion: apps/v1\nkind: Deployment"
        );
    }

    #[test]
    fn plain_text_is_only_trimmed() {
        assert_eq!(strip_code_fences("  kind: Service\n"), "kind: Service");
    }

    #[test]
    fn markers_are_removed_anywhere_in_the_text() {
        let text = "Here you go:\n```hcl\nprovider \"aws\" {}\n```\nDone.";
        assert_eq!(
            strip_code_fences(text),
            "Here you go:\n\nprovider \"aws\" {}\n\nDone."
        );
    }

    #[test]
    fn sanitizing_twice_changes_nothing() {
        let once = strip_code_fences("```terraform\nresource \"aws_vpc\" \"main\" {}\n```");
        assert_eq!(strip_code_fences(&once), once);
    }
}
