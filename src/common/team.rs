use crate::common::newtypes::TeamMemberId;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    /// Portrait filename, reserved for a future asset pipeline
    pub image: &'static str,
    pub social: SocialLinks,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

// The second member never provided a name, keep the entry as delivered.
pub(crate) const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        id: TeamMemberId(1),
        name: "Rahul Sharma",
        role: "Frontend Developer",
        bio: "Computer Science student specializing in React and modern web technologies.",
        image: "team1.svg",
        social: SocialLinks {
            email: "rahul.sharma@example.com",
            linkedin: "https://linkedin.com/in/rahulsharma",
            github: "https://github.com/rahulsharma",
        },
    },
    TeamMember {
        id: TeamMemberId(2),
        name: "",
        role: "Backend Developer",
        bio: "Java enthusiast with experience in Spring Boot and database management.",
        image: "team2.svg",
        social: SocialLinks {
            email: "priya.patel@example.com",
            linkedin: "https://linkedin.com/in/priyapatel",
            github: "https://github.com/priyapatel",
        },
    },
    TeamMember {
        id: TeamMemberId(3),
        name: "Amit Kumar",
        role: "UI/UX Designer",
        bio: "Design student passionate about creating intuitive and accessible user interfaces.",
        image: "team3.svg",
        social: SocialLinks {
            email: "amit.kumar@example.com",
            linkedin: "https://linkedin.com/in/amitkumar",
            github: "https://github.com/amitkumar",
        },
    },
];

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_roster_size() {
        assert_eq!(3, TEAM_MEMBERS.len());
    }

    #[test]
    fn test_unique_ids() {
        let ids: HashSet<_> = TEAM_MEMBERS.iter().map(|m| m.id).collect();
        assert_eq!(TEAM_MEMBERS.len(), ids.len());
    }

    #[test]
    fn test_second_member_has_empty_name() {
        assert_eq!("", TEAM_MEMBERS[1].name);
        assert_eq!("Backend Developer", TEAM_MEMBERS[1].role);
    }

    #[test]
    fn test_declaration_order() {
        assert_eq!("Rahul Sharma", TEAM_MEMBERS[0].name);
        assert_eq!("Amit Kumar", TEAM_MEMBERS[2].name);
        assert_eq!("https://github.com/amitkumar", TEAM_MEMBERS[2].social.github);
    }
}
