use super::*;

#[test]
fn cards_follow_stats_in_order() {
    let stats = DashboardStats {
        total_masuk: 10,
        total_keluar: 5,
        masuk_bulan_ini: 2,
        keluar_bulan_ini: 1,
        belum_disposisi: 3,
    };
    let values: Vec<u32> = stat_cards(&stats).iter().map(|(_, v, _)| *v).collect();
    assert_eq!(values, vec![10, 5, 2, 1, 3]);
}

#[test]
fn card_labels_are_distinct() {
    let cards = stat_cards(&DashboardStats::default());
    for (i, a) in cards.iter().enumerate() {
        for b in &cards[i + 1..] {
            assert_ne!(a.0, b.0);
        }
    }
}
