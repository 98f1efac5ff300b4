//! Rule-based business-value explanations
//!
//! Rules are matched in order against the lowercased display name; the first
//! rule with any keyword contained in the name wins.
//!
//! The `"x "` keyword targets the X social network. It does not match a name
//! ending in "X" and does match any word ending in "x" followed by a space
//! (e.g. "Inbox to ..."). It is kept as is.

/// An ordered (keywords -> explanation) rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessValueRule {
    pub keywords: &'static [&'static str],
    pub explanation: &'static str,
}

impl BusinessValueRule {
    /// `lowercase_name` must already be lowercased
    #[inline]
    pub fn matches(&self, lowercase_name: &str) -> bool {
        self.keywords.iter().any(|k| lowercase_name.contains(k))
    }
}

pub const FALLBACK_EXPLANATION: &str = "Automates repetitive work to save time and reduce errors";

pub const RULES: &[BusinessValueRule] = &[
    BusinessValueRule {
        keywords: &["slack"],
        explanation: "Instant team visibility and faster response",
    },
    BusinessValueRule {
        keywords: &["google drive", "onedrive", "dropbox"],
        explanation: "Hands-free file organization and backup",
    },
    BusinessValueRule {
        keywords: &["sheet", "excel"],
        explanation: "Single source of truth, fewer copy-paste errors",
    },
    BusinessValueRule {
        keywords: &["calendar"],
        explanation: "Fewer missed deadlines with automated reminders",
    },
    BusinessValueRule {
        keywords: &["crm", "hubspot", "salesforce"],
        explanation: "Improved pipeline hygiene and reporting",
    },
    BusinessValueRule {
        keywords: &["trello", "asana", "jira", "clickup"],
        explanation: "Automatic task creation and tighter execution",
    },
    BusinessValueRule {
        keywords: &["github", "gitlab", "discord"],
        explanation: "Developer alerts without context switching",
    },
    BusinessValueRule {
        keywords: &["typeform", "form"],
        explanation: "Faster data capture and structured logging",
    },
    BusinessValueRule {
        keywords: &["mailchimp", "email", "gmail"],
        explanation: "Timely outreach and consistent follow-ups",
    },
    BusinessValueRule {
        keywords: &["twitter", "x ", "linkedin"],
        explanation: "Consistent outbound distribution without manual posts",
    },
];

/// Explanation for a template display name
pub fn explain_business_value(name: &str) -> &'static str {
    let name = name.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&name))
        .map_or(FALLBACK_EXPLANATION, |rule| rule.explanation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(
            explain_business_value("Slack to Google Sheet Sync"),
            "Instant team visibility and faster response"
        );
        // Drive before sheet
        assert_eq!(
            explain_business_value("Copy Google Drive files to Excel"),
            "Hands-free file organization and backup"
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(explain_business_value("Random Widget Connector"), FALLBACK_EXPLANATION);
        assert_eq!(explain_business_value(""), FALLBACK_EXPLANATION);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            explain_business_value("NEW HUBSPOT CONTACT"),
            "Improved pipeline hygiene and reporting"
        );
    }

    #[test]
    fn test_each_rule_reachable() {
        let names = [
            "Slack ping",
            "Dropbox backup",
            "Excel rows",
            "Calendar events",
            "Salesforce leads",
            "Jira tickets",
            "GitLab pipelines",
            "Typeform answers",
            "Mailchimp subscribers",
            "LinkedIn posts",
        ];
        for (name, rule) in names.iter().zip(RULES) {
            assert_eq!(explain_business_value(name), rule.explanation, "{name}");
        }
    }

    #[test]
    fn test_x_keyword_quirks() {
        let social = "Consistent outbound distribution without manual posts";
        assert_eq!(explain_business_value("Post to X every morning"), social);
        assert_eq!(explain_business_value("Share blog posts on X"), FALLBACK_EXPLANATION);
        assert_eq!(explain_business_value("Inbox to archive"), social);
    }

    #[test]
    fn test_form_substring_matches_inside_words() {
        // "form" is a substring of "information"
        assert_eq!(
            explain_business_value("Collect information"),
            "Faster data capture and structured logging"
        );
    }
}
