/// Closing prompts asked in every interview regardless of role.
pub const COMMON_PROMPTS: [&str; 5] = [
    "Tell me about yourself and your background in this field.",
    "What interests you most about this role and our company?",
    "Describe a challenging project you've worked on and how you overcame obstacles.",
    "How do you handle working under pressure and tight deadlines?",
    "Where do you see yourself in the next 5 years?",
];

/// Role-specific opening prompts, or `None` for an unknown role.
pub fn role_prompts(role_id: &str) -> Option<&'static [&'static str]> {
    let prompts: &'static [&'static str] = match role_id {
        "software-engineer" => &[
            "Walk through your approach to solving a hard algorithmic problem.",
            "Explain a system you designed. How did you handle scalability?",
            "Describe a time you improved performance or reduced costs.",
        ],
        "product-manager" => &[
            "How do you prioritize a roadmap with conflicting stakeholder needs?",
            "Describe your approach to defining success metrics for a feature.",
            "Tell me about a product decision you would change and why.",
        ],
        "ui-ux-designer" => &[
            "Describe your end-to-end design process for a new feature.",
            "How do you validate your design decisions?",
            "Share an example where user research changed your solution.",
        ],
        "marketing-manager" => &[
            "How do you structure a multi-channel campaign for a product launch?",
            "Discuss a time you turned around underperforming metrics.",
            "What KPIs do you track and why?",
        ],
        "sales-representative" => &[
            "Walk me through your sales process from prospecting to close.",
            "Tell me about handling a difficult objection and the outcome.",
            "How do you build and maintain client relationships?",
        ],
        "devops-engineer" => &[
            "Describe your CI/CD pipeline design and security considerations.",
            "How do you approach observability and incident response?",
            "Share a time you improved reliability or lowered MTTR.",
        ],
        _ => return None,
    };
    Some(prompts)
}

/// Builds the question set for a role: its own prompts first, then the
/// common prompts. Unknown or empty ids get the common prompts only.
pub fn question_set(role_id: &str) -> Vec<String> {
    role_prompts(role_id)
        .unwrap_or(&[])
        .iter()
        .chain(COMMON_PROMPTS.iter())
        .map(|q| q.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::roles::default_roles;

    fn common() -> Vec<String> {
        COMMON_PROMPTS.iter().map(|q| q.to_string()).collect()
    }

    #[test]
    fn test_known_roles_end_with_common_prompts() {
        for role in default_roles() {
            let questions = question_set(&role.id);
            let specific = role_prompts(&role.id).unwrap();
            assert!(!specific.is_empty(), "{} has no prompts", role.id);
            assert_eq!(questions.len(), specific.len() + COMMON_PROMPTS.len());
            assert_eq!(&questions[..specific.len()], specific);
            assert_eq!(questions[specific.len()..].to_vec(), common());
        }
    }

    #[test]
    fn test_unknown_role_gets_common_only() {
        assert_eq!(question_set("unknown-role"), common());
        assert_eq!(question_set(""), common());
        assert_eq!(question_set("Software-Engineer"), common());
    }

    #[test]
    fn test_question_set_is_deterministic() {
        assert_eq!(question_set("devops-engineer"), question_set("devops-engineer"));
    }

    #[test]
    fn test_software_engineer_first_prompt() {
        assert_eq!(
            question_set("software-engineer")[0],
            "Walk through your approach to solving a hard algorithmic problem."
        );
    }
}
