use super::*;
use crate::config::TagEntry;

fn scores(pairs: &[(&str, usize)]) -> Vec<TagScore> {
    pairs
        .iter()
        .map(|(tag, score)| TagScore {
            tag: (*tag).to_string(),
            score: *score,
        })
        .collect()
}

fn config_of(names: &[&str]) -> TagConfig {
    TagConfig::new(
        names
            .iter()
            .map(|name| TagEntry::new(*name, ["x"]))
            .collect(),
    )
}

#[test]
fn test_rank_orders_descending() {
    let ranked = rank_tags(scores(&[("A", 1), ("B", 3), ("C", 2)]));
    let names: Vec<&str> = ranked.iter().map(|scored| scored.tag.as_str()).collect();
    assert_eq!(names, vec!["B", "C", "A"]);
}

#[test]
fn test_rank_ties_keep_configuration_order() {
    let ranked = rank_tags(scores(&[("A", 2), ("B", 5), ("C", 2), ("D", 2)]));
    let names: Vec<&str> = ranked.iter().map(|scored| scored.tag.as_str()).collect();
    assert_eq!(names, vec!["B", "A", "C", "D"]);
}

#[test]
fn test_select_takes_top_two() {
    let ranked = rank_tags(scores(&[("SALES", 2), ("SUPPORT", 1), ("BILLING", 1)]));
    let result = select_top_two(&ranked, &config_of(&["SALES", "SUPPORT", "BILLING"]));
    assert_eq!(result.primary, "SALES");
    assert_eq!(result.secondary, "SUPPORT");
}

#[test]
fn test_select_zero_top_score_falls_back() {
    let config = config_of(&["SALES", "SUPPORT", "OTHER"]);
    let ranked = rank_tags(scores(&[("SALES", 0), ("SUPPORT", 0), ("OTHER", 0)]));
    let result = select_top_two(&ranked, &config);
    assert_eq!(result.primary, "OTHER");
    assert_eq!(result.secondary, "OTHER");
}

#[test]
fn test_select_zero_second_replaced_by_catch_all() {
    let config = config_of(&["SALES", "SUPPORT", "OTHER"]);
    let ranked = rank_tags(scores(&[("SALES", 3), ("SUPPORT", 0), ("OTHER", 0)]));
    let result = select_top_two(&ranked, &config);
    assert_eq!(result.primary, "SALES");
    assert_eq!(result.secondary, "OTHER");
}

#[test]
fn test_select_zero_second_kept_without_catch_all() {
    let config = config_of(&["SALES", "SUPPORT"]);
    let ranked = rank_tags(scores(&[("SALES", 3), ("SUPPORT", 0)]));
    let result = select_top_two(&ranked, &config);
    assert_eq!(result.primary, "SALES");
    assert_eq!(result.secondary, "SUPPORT");
}

#[test]
fn test_select_single_tag_config_falls_back() {
    let config = config_of(&["SALES"]);
    let ranked = rank_tags(scores(&[("SALES", 4)]));
    let result = select_top_two(&ranked, &config);
    assert_eq!(result.primary, "UNKNOWN");
    assert_eq!(result.secondary, "UNKNOWN");
}

#[test]
fn test_select_empty_ranking_falls_back() {
    let result = select_top_two(&[], &TagConfig::default());
    assert_eq!(result.primary, "UNKNOWN");
    assert_eq!(result.secondary, "UNKNOWN");
}
