//! Interview question selection. Questions come from fixed banks; coding challenges are
//! picked from the catalog, never generated.

use crate::analysis::question_bank::{
    behavioral_for, system_design_for, technical_for, BankEntry, BASE_BEHAVIORAL,
    BASE_SYSTEM_DESIGN, BASE_TECHNICAL,
};
use crate::catalog::{self, data};
use crate::models::analysis::{InterviewQuestions, QuestionWithAnswer, RoleType};
use crate::models::coding::{CodingQuestion, Difficulty};

pub const MAX_BEHAVIORAL: usize = 7;
pub const MAX_TECHNICAL: usize = 7;
pub const MAX_SYSTEM_DESIGN: usize = 2;
pub const MAX_CODING: usize = 3;
/// Role-specific technical questions kept before the shared ones are appended.
const ROLE_TECHNICAL_TAKE: usize = 4;

pub fn generate(role: RoleType) -> InterviewQuestions {
    InterviewQuestions {
        behavioral: behavioral(role),
        technical: technical(role),
        coding: coding(role),
        system_design: system_design(role),
    }
}

/// Shared questions first, then the role's own.
pub fn behavioral(role: RoleType) -> Vec<QuestionWithAnswer> {
    collect(
        BASE_BEHAVIORAL.iter().chain(behavioral_for(role)),
        MAX_BEHAVIORAL,
    )
}

/// Up to four role questions first, then the shared ones.
pub fn technical(role: RoleType) -> Vec<QuestionWithAnswer> {
    collect(
        technical_for(role)
            .iter()
            .take(ROLE_TECHNICAL_TAKE)
            .chain(BASE_TECHNICAL),
        MAX_TECHNICAL,
    )
}

/// The role's bank (or the shared bank when the role has none), then the shared bank.
pub fn system_design(role: RoleType) -> Vec<QuestionWithAnswer> {
    let primary = system_design_for(role).unwrap_or(BASE_SYSTEM_DESIGN);
    collect(
        primary.iter().chain(BASE_SYSTEM_DESIGN),
        MAX_SYSTEM_DESIGN,
    )
}

/// One easy warm-up, two role-dependent challenges, then a hard one if there is room.
pub fn coding(role: RoleType) -> Vec<CodingQuestion> {
    let role_picks = match role {
        RoleType::Backend | RoleType::Fullstack => [data::RATE_LIMITER_ID, data::BST_ID],
        _ => [data::DEBOUNCE_ID, data::FIND_PAIRS_ID],
    };

    let mut selected: Vec<CodingQuestion> = Vec::new();
    selected.extend(catalog::first_of(Difficulty::Easy));
    selected.extend(role_picks.iter().filter_map(|id| catalog::by_id(id)));
    if selected.len() < MAX_CODING + 1 {
        selected.extend(catalog::first_of(Difficulty::Hard));
    }
    selected.truncate(MAX_CODING);
    selected
}

fn collect<'a>(
    entries: impl Iterator<Item = &'a BankEntry>,
    limit: usize,
) -> Vec<QuestionWithAnswer> {
    entries.take(limit).map(BankEntry::to_question).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [RoleType; 7] = [
        RoleType::Frontend,
        RoleType::Backend,
        RoleType::Fullstack,
        RoleType::Devops,
        RoleType::Data,
        RoleType::Mobile,
        RoleType::Other,
    ];

    #[test]
    fn test_counts_within_limits_for_every_role() {
        for role in ALL_ROLES {
            let q = generate(role);
            assert!(q.behavioral.len() <= MAX_BEHAVIORAL, "{role:?}");
            assert!(q.technical.len() <= MAX_TECHNICAL, "{role:?}");
            assert!(q.system_design.len() <= MAX_SYSTEM_DESIGN, "{role:?}");
            assert!(q.coding.len() <= MAX_CODING, "{role:?}");
            assert!(!q.behavioral.is_empty());
            assert!(!q.technical.is_empty());
        }
    }

    #[test]
    fn test_behavioral_base_first_then_role() {
        let q = behavioral(RoleType::Backend);
        assert_eq!(q.len(), 7);
        assert_eq!(q[0].question, BASE_BEHAVIORAL[0].question);
        assert!(q[5].question.contains("scalable API"));
    }

    #[test]
    fn test_behavioral_without_role_bank() {
        assert_eq!(behavioral(RoleType::Mobile).len(), BASE_BEHAVIORAL.len());
    }

    #[test]
    fn test_technical_role_first_then_base() {
        let q = technical(RoleType::Frontend);
        assert_eq!(q.len(), 7);
        assert!(q[0].question.contains("virtual DOM"));
        assert_eq!(q[4].question, BASE_TECHNICAL[0].question);
    }

    #[test]
    fn test_technical_unknown_role_uses_fullstack_bank() {
        assert_eq!(technical(RoleType::Data), technical(RoleType::Fullstack));
    }

    #[test]
    fn test_system_design_role_bank() {
        let q = system_design(RoleType::Data);
        assert_eq!(q.len(), 2);
        assert!(q[0].question.contains("recommendation"));
    }

    #[test]
    fn test_system_design_falls_back_to_base() {
        let q = system_design(RoleType::Mobile);
        assert_eq!(q[0].question, BASE_SYSTEM_DESIGN[0].question);
        assert_eq!(q[1].question, BASE_SYSTEM_DESIGN[1].question);
    }

    #[test]
    fn test_backend_coding_selection() {
        let picks = coding(RoleType::Backend);
        let ids: Vec<&str> = picks.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec![data::MAX_PRODUCT_ID, data::RATE_LIMITER_ID, data::BST_ID]);
        assert_eq!(
            picks.iter().filter(|q| q.difficulty == Difficulty::Easy).count(),
            1
        );
        assert!(picks.iter().any(|q| q.tags.contains(&"rate-limiting".to_string())));
        assert!(picks.iter().any(|q| q.tags.contains(&"bst".to_string())));
    }

    #[test]
    fn test_frontend_coding_selection() {
        let ids: Vec<String> = coding(RoleType::Frontend).into_iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![data::MAX_PRODUCT_ID, data::DEBOUNCE_ID, data::FIND_PAIRS_ID]);
    }

    #[test]
    fn test_hard_question_truncated_away() {
        for role in ALL_ROLES {
            assert!(coding(role).iter().all(|q| q.difficulty != Difficulty::Hard));
        }
    }
}
