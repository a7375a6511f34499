use super::*;

#[test]
fn stat_tiles_follow_status_order() {
    let stats = FeedbackStats { total: 9, open: 4, in_progress: 2, resolved: 2, closed: 1, ..FeedbackStats::default() };
    let tiles = stat_tiles(&stats);
    assert_eq!(tiles[0], ("Total", 9));
    assert_eq!(tiles.iter().map(|(_, n)| n).sum::<u32>(), 18);
    assert_eq!(tiles.len(), 5);
}

#[test]
fn short_date_takes_day_prefix() {
    assert_eq!(short_date("2024-05-01T10:20:30Z"), "2024-05-01");
    assert_eq!(short_date("May 1"), "May 1");
}
