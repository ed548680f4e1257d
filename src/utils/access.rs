use crate::config::AccessConfig;
use crate::types::user::Role;

/// Static email allow-lists deciding who gets the teacher and student routes.
#[derive(Clone, Debug, Default)]
pub struct AccessPolicy {
    teacher_emails: Vec<String>,
    student_emails: Vec<String>,
    student_domains: Vec<String>,
}

fn normalise(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

impl AccessPolicy {
    pub fn new(cfg: &AccessConfig) -> Self {
        Self {
            teacher_emails: cfg.teacher_emails.iter().map(|e| normalise(e)).collect(),
            student_emails: cfg.student_emails.iter().map(|e| normalise(e)).collect(),
            student_domains: cfg
                .student_domains
                .iter()
                .map(|d| normalise(d).trim_start_matches('@').to_string())
                .collect(),
        }
    }

    pub fn is_teacher(&self, email: &str) -> bool {
        let email = normalise(email);
        !email.is_empty() && self.teacher_emails.iter().any(|t| *t == email)
    }

    pub fn is_student(&self, email: &str) -> bool {
        let email = normalise(email);
        if email.is_empty() {
            return false;
        }
        if self.student_emails.iter().any(|s| *s == email) {
            return true;
        }
        match email.rsplit_once('@') {
            Some((local, domain)) if !local.is_empty() => self.student_domains.iter().any(|d| d == domain),
            _ => false,
        }
    }

    pub fn role(&self, email: Option<&str>) -> Role {
        match email {
            Some(e) if self.is_teacher(e) => Role::Teacher,
            Some(e) if self.is_student(e) => Role::Student,
            _ => Role::Guest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> AccessPolicy {
        AccessPolicy::new(&AccessConfig {
            teacher_emails: vec!["advisor@district.k12.wi.us".into()],
            student_emails: vec!["Helper@Gmail.com".into()],
            student_domains: vec!["@franklinsabers.org".into()],
        })
    }

    #[test]
    fn teacher_match_ignores_case_and_whitespace() {
        let p = policy();
        assert!(p.is_teacher(" Advisor@District.K12.WI.us "));
        assert!(!p.is_teacher("advisor@district.k12.wi.us.evil.com"));
        assert!(!p.is_teacher(""));
    }

    #[test]
    fn student_by_domain_or_explicit_address() {
        let p = policy();
        assert!(p.is_student("kid@franklinsabers.org"));
        assert!(p.is_student("helper@gmail.com"));
        assert!(!p.is_student("kid@notfranklinsabers.org"));
        assert!(!p.is_student("@franklinsabers.org"));
        assert!(!p.is_student("franklinsabers.org"));
    }

    #[test]
    fn teacher_wins_over_student_and_missing_email_is_guest() {
        let p = AccessPolicy::new(&AccessConfig {
            teacher_emails: vec!["coach@franklinsabers.org".into()],
            student_emails: vec![],
            student_domains: vec!["franklinsabers.org".into()],
        });
        assert_eq!(p.role(Some("coach@franklinsabers.org")), Role::Teacher);
        assert_eq!(p.role(Some("kid@franklinsabers.org")), Role::Student);
        assert_eq!(p.role(Some("someone@else.com")), Role::Guest);
        assert_eq!(p.role(None), Role::Guest);
    }
}
