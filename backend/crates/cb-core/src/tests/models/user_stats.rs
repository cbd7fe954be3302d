use crate::UserStats;

use uuid::Uuid;

#[test]
fn test_empty_stats_average_is_zero() {
    let stats = UserStats::empty(Uuid::new_v4());
    assert_eq!(stats.games_played, 0);
    assert_eq!(stats.average_clicks(), 0.0);
}

#[test]
fn test_average_clicks() {
    let stats = UserStats {
        user_id: Uuid::new_v4(),
        games_played: 4,
        total_clicks: 30,
        best_score: 12,
    };
    assert_eq!(stats.average_clicks(), 7.5);
}
