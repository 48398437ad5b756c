//! Integration tests for mood-driven affirmation selection.

use zenpulse_core::{
    build_prompt, hash, select_affirmation, AffirmationBank, AffirmationSelector, Mood,
    ValidationError,
};

fn bank_of(sizes: [usize; 3]) -> AffirmationBank {
    AffirmationBank::new(Mood::ALL.into_iter().zip(sizes).map(|(mood, n)| {
        let lines: Vec<String> = (0..n).map(|i| format!("{mood} #{i}")).collect();
        (mood, lines)
    }))
    .unwrap()
}

#[test]
fn test_builtin_prompt_hashes_are_pinned() {
    let cases = [
        (Mood::Positive, -379_049_288, 0),
        (Mood::Neutral, -608_022_922, 0),
        (Mood::Negative, -901_807_225, 1),
    ];
    let bank = AffirmationBank::builtin();
    for (mood, expected_hash, expected_index) in cases {
        assert_eq!(hash(&build_prompt(mood)), expected_hash, "{mood}");
        assert_eq!(AffirmationSelector::default().index_for(mood), expected_index);
        assert_eq!(select_affirmation(mood), bank.get(mood)[expected_index]);
    }
}

#[test]
fn test_larger_banks_use_same_indexing() {
    let selector = AffirmationSelector::new(bank_of([5, 7, 11]));
    for mood in Mood::ALL {
        let len = selector.bank().get(mood).len();
        let expected = hash(&build_prompt(mood)).unsigned_abs() as usize % len;
        assert_eq!(selector.index_for(mood), expected);
        assert_eq!(selector.select(mood), format!("{mood} #{expected}"));
    }
}

#[test]
fn test_single_entry_banks() {
    let selector = AffirmationSelector::new(bank_of([1, 1, 1]));
    for mood in Mood::ALL {
        assert_eq!(selector.select(mood), format!("{mood} #0"));
    }
}

#[test]
fn test_empty_bank_fails_at_construction() {
    let result = AffirmationBank::new(Mood::ALL.into_iter().map(|mood| {
        let lines = if mood == Mood::Negative {
            Vec::new()
        } else {
            vec!["ok".to_string()]
        };
        (mood, lines)
    }));
    assert!(matches!(result, Err(ValidationError::EmptyCollection(_))));
}

#[test]
fn test_prompts_differ_per_mood() {
    let prompts: Vec<_> = Mood::ALL.into_iter().map(build_prompt).collect();
    assert_ne!(prompts[0], prompts[1]);
    assert_ne!(prompts[1], prompts[2]);
    assert_ne!(prompts[0], prompts[2]);
}
