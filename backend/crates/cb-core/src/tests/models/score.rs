use crate::{CoreError, Score};

#[test]
fn test_score_accepts_zero_and_positive() {
    assert_eq!(Score::new(0).unwrap().value(), 0);
    assert_eq!(Score::new(42).unwrap().value(), 42);
}

#[test]
fn test_score_rejects_negative() {
    let result = Score::new(-1);
    assert!(matches!(
        result,
        Err(CoreError::NegativeScore { value: -1, .. })
    ));
}

#[test]
fn test_score_deserializes_from_integer() {
    let score: Score = serde_json::from_str("17").unwrap();
    assert_eq!(score.value(), 17);
}

#[test]
fn test_score_deserialize_rejects_negative() {
    let result: Result<Score, _> = serde_json::from_str("-5");
    assert!(result.is_err());
}
