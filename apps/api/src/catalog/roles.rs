use serde::{Deserialize, Serialize};

/// A job category offered on the role picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub title: String,
    pub level: String,
    pub questions: u32,
    pub description: String,
    pub color: String,
}

struct RoleSeed {
    id: &'static str,
    title: &'static str,
    level: &'static str,
    questions: u32,
    description: &'static str,
    color: &'static str,
}

const ROLE_SEEDS: [RoleSeed; 6] = [
    RoleSeed {
        id: "software-engineer",
        title: "Software Engineer",
        level: "All Levels",
        questions: 15,
        description: "Technical coding interviews, algorithms, system design",
        color: "text-primary",
    },
    RoleSeed {
        id: "product-manager",
        title: "Product Manager",
        level: "Mid-Senior",
        questions: 12,
        description: "Strategy, roadmapping, stakeholder management",
        color: "text-success",
    },
    RoleSeed {
        id: "ui-ux-designer",
        title: "UI/UX Designer",
        level: "All Levels",
        questions: 10,
        description: "Design thinking, user research, portfolio review",
        color: "text-warning",
    },
    RoleSeed {
        id: "marketing-manager",
        title: "Marketing Manager",
        level: "Mid-Senior",
        questions: 12,
        description: "Campaign strategy, analytics, brand management",
        color: "text-danger",
    },
    RoleSeed {
        id: "sales-representative",
        title: "Sales Representative",
        level: "All Levels",
        questions: 10,
        description: "Client relations, negotiation, sales process",
        color: "text-primary-glow",
    },
    RoleSeed {
        id: "devops-engineer",
        title: "DevOps Engineer",
        level: "Mid-Senior",
        questions: 14,
        description: "Infrastructure, CI/CD, cloud platforms",
        color: "text-success-glow",
    },
];

/// Builds the role list in display order.
pub fn default_roles() -> Vec<Role> {
    ROLE_SEEDS
        .iter()
        .map(|seed| Role {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            level: seed.level.to_string(),
            questions: seed.questions,
            description: seed.description.to_string(),
            color: seed.color.to_string(),
        })
        .collect()
}

/// Title derived from a role id when the catalog has no entry for it:
/// `"data-scientist"` → `"Data Scientist"`, empty → `"Interview"`.
pub fn title_from_id(role_id: &str) -> String {
    let words: Vec<String> = role_id
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        "Interview".to_string()
    } else {
        words.join(" ")
    }
}

/// Listed title for `role_id`, falling back to [`title_from_id`].
pub fn title_for(roles: &[Role], role_id: &str) -> String {
    roles
        .iter()
        .find(|r| r.id == role_id)
        .map(|r| r.title.clone())
        .unwrap_or_else(|| title_from_id(role_id))
}
