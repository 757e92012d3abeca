//! The mock directory: two fixed tables standing in for a database.
//!
//! Handlers receive a `&Directory` — there is no global table. Queries
//! preserve seed order, which is the order pages render in.

use chrono::{Duration, Utc};

use crate::model::{Project, Role, User};

#[derive(Debug, Clone)]
pub struct Directory {
    users: Vec<User>,
    projects: Vec<Project>,
}

impl Directory {
    /// The demo dataset: two accounts and three projects. Never mutated.
    pub fn seeded() -> Self {
        let now = Utc::now();

        let users = vec![
            User {
                id: 101,
                username: "jsmith24".into(),
                email: "john.s@college.edu".into(),
                password: "password123".into(),
                role: Role::Student,
                skills: vec!["React".into(), "Python".into()],
            },
            User {
                id: 201,
                username: "drchen".into(),
                email: "d.chen@college.edu".into(),
                password: "faculty456".into(),
                role: Role::Faculty,
                skills: vec!["TensorFlow".into(), "NLP".into()],
            },
        ];

        let projects = vec![
            Project {
                id: 1,
                title: "Decentralized File Storage".into(),
                owner_id: 101,
                owner: "Alex B. (Student)".into(),
                owner_username: "alexb".into(),
                description: "A secure, blockchain-based file storage solution for campus \
                              documents, aimed at reducing reliance on central servers."
                    .into(),
                tech_stack: "Solidity, React, IPFS".into(),
                status: "Beta V1".into(),
                feedback_count: 14,
                is_suggested: true,
                is_owned: false,
                created_at: now - Duration::days(64),
            },
            Project {
                id: 2,
                title: "AI Campus Chatbot".into(),
                owner_id: 201,
                owner: "Dr. Chen (Faculty)".into(),
                owner_username: "drchen".into(),
                description: "A Natural Language Processing model trained on the college's \
                              syllabus and FAQ documents to instantly answer student queries."
                    .into(),
                tech_stack: "Python, TensorFlow, Azure Bot Services".into(),
                status: "V2 Development".into(),
                feedback_count: 1,
                is_suggested: true,
                is_owned: true,
                created_at: now - Duration::days(58),
            },
            Project {
                id: 3,
                title: "Blockchain Voting System".into(),
                owner_id: 101,
                owner: "Alex B. (Student)".into(),
                owner_username: "alexb".into(),
                description: "A secure and transparent voting system for campus elections \
                              using blockchain technology."
                    .into(),
                tech_stack: "Solidity, Web3.js".into(),
                status: "Seeking Collaborators".into(),
                feedback_count: 5,
                // Owned by a user but kept off the main feed.
                is_suggested: false,
                is_owned: true,
                created_at: now - Duration::days(71),
            },
        ];

        Self { users, projects }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects flagged for the general feed, in table order.
    pub fn suggested_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.is_suggested).collect()
    }

    /// Projects led by the given user, in table order. Ownership is computed
    /// from `owner_id`, never from the `is_owned` seed flag.
    pub fn projects_owned_by(&self, user_id: u32) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.is_owned_by(user_id))
            .collect()
    }

    /// Exact, case-sensitive match on email AND password AND role.
    /// Plaintext comparison — mock login over seed data.
    pub fn find_login(&self, email: &str, password: &str, role: Role) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password && u.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let dir = Directory::seeded();
        assert_eq!(dir.users().len(), 2);
        assert_eq!(dir.projects().len(), 3);
    }

    #[test]
    fn test_suggested_preserves_table_order() {
        let dir = Directory::seeded();
        let suggested: Vec<u32> = dir.suggested_projects().iter().map(|p| p.id).collect();
        assert_eq!(suggested, vec![1, 2]);
    }

    #[test]
    fn test_owned_by_student() {
        let dir = Directory::seeded();
        let owned: Vec<u32> = dir.projects_owned_by(101).iter().map(|p| p.id).collect();
        assert_eq!(owned, vec![1, 3]);
    }

    #[test]
    fn test_owned_by_faculty() {
        let dir = Directory::seeded();
        let owned: Vec<u32> = dir.projects_owned_by(201).iter().map(|p| p.id).collect();
        assert_eq!(owned, vec![2]);
    }

    #[test]
    fn test_owned_ignores_seed_flag() {
        // Project 1 ships with is_owned = false but belongs to 101; project 2
        // ships with is_owned = true but belongs to 201, not 101.
        let dir = Directory::seeded();
        let owned = dir.projects_owned_by(101);
        assert!(owned.iter().any(|p| p.id == 1 && !p.is_owned));
        assert!(!owned.iter().any(|p| p.id == 2));
    }

    #[test]
    fn test_find_login_exact_match() {
        let dir = Directory::seeded();
        let user = dir
            .find_login("d.chen@college.edu", "faculty456", Role::Faculty)
            .unwrap();
        assert_eq!(user.id, 201);
        assert_eq!(user.username, "drchen");
    }

    #[test]
    fn test_find_login_wrong_password() {
        let dir = Directory::seeded();
        assert!(dir
            .find_login("d.chen@college.edu", "wrong", Role::Faculty)
            .is_none());
    }

    #[test]
    fn test_find_login_wrong_role() {
        let dir = Directory::seeded();
        assert!(dir
            .find_login("d.chen@college.edu", "faculty456", Role::Student)
            .is_none());
    }

    #[test]
    fn test_find_login_is_case_sensitive() {
        let dir = Directory::seeded();
        assert!(dir
            .find_login("D.Chen@college.edu", "faculty456", Role::Faculty)
            .is_none());
        assert!(dir
            .find_login("d.chen@college.edu", "FACULTY456", Role::Faculty)
            .is_none());
    }

    #[test]
    fn test_project_lookup() {
        let dir = Directory::seeded();
        assert_eq!(dir.project(2).unwrap().title, "AI Campus Chatbot");
        assert!(dir.project(99).is_none());
    }
}
