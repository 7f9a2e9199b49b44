//! Trailer matching engine
//!
//! Ranks catalog trailers for a load by applying named strategies in order:
//!
//! 1. [`MatchStrategy::ExtremeLength`]: loads longer than 100 ft
//! 2. [`MatchStrategy::VeryOversized`]: loads past the very-oversized limits
//! 3. [`MatchStrategy::ExactFit`]: trailers whose envelope holds the load
//! 4. [`MatchStrategy::ClosestAlternative`]: top 5 by fit score
//!
//! The first strategy producing candidates wins. The last one always produces
//! candidates for a non-empty catalog, so a match is never empty.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::{TrailerCatalog, TAG_OVERHEIGHT, TAG_OVERLENGTH, TAG_OVERSIZED, TAG_OVERWEIGHT};
use crate::model::load::{
    VERY_OVERSIZED_HEIGHT_FT, VERY_OVERSIZED_LENGTH_FT, VERY_OVERSIZED_WEIGHT_LBS,
    VERY_OVERSIZED_WIDTH_FT,
};
use crate::model::{LoadSpecification, TrailerSpec, TrailerType};

/// Number of trailers kept when no trailer holds the load
pub const MAX_CLOSEST_ALTERNATIVES: usize = 5;

/// Score multiplier for specialized trailers when the load is oversized
pub const SPECIALIZATION_BONUS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    ExtremeLength,
    VeryOversized,
    ExactFit,
    ClosestAlternative,
}

impl MatchStrategy {
    /// Strategies in priority order
    pub const ALL: [MatchStrategy; 4] = [
        MatchStrategy::ExtremeLength,
        MatchStrategy::VeryOversized,
        MatchStrategy::ExactFit,
        MatchStrategy::ClosestAlternative,
    ];

    /// Ranked candidates, empty when the strategy does not apply to the load
    pub fn candidates(&self, catalog: &TrailerCatalog, load: &LoadSpecification) -> Vec<TrailerSpec> {
        match self {
            MatchStrategy::ExtremeLength if load.is_extreme_length() => {
                extreme_length_candidates(catalog, load)
            }
            MatchStrategy::VeryOversized if load.is_very_oversized() => {
                very_oversized_candidates(catalog, load)
            }
            MatchStrategy::ExactFit => exact_fit_candidates(catalog, load),
            MatchStrategy::ClosestAlternative => closest_alternatives(catalog, load),
            _ => Vec::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchStrategy::ExtremeLength => "extreme length",
            MatchStrategy::VeryOversized => "very oversized",
            MatchStrategy::ExactFit => "exact fit",
            MatchStrategy::ClosestAlternative => "closest alternatives",
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Ranked trailers, best fit first, and the strategy that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub strategy: MatchStrategy,
    pub trailers: Vec<TrailerSpec>,
    /// At least one returned trailer holds the load as-is
    pub exact: bool,
}

impl MatchResult {
    fn new(strategy: MatchStrategy, trailers: Vec<TrailerSpec>, load: &LoadSpecification) -> Self {
        let exact = trailers.iter().any(|t| t.fits(load));
        Self {
            strategy,
            trailers,
            exact,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }

    pub fn best(&self) -> Option<&TrailerSpec> {
        self.trailers.first()
    }

    pub fn len(&self) -> usize {
        self.trailers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trailers.is_empty()
    }
}

/// Rank the catalog for a load
pub fn match_trailers(catalog: &TrailerCatalog, load: &LoadSpecification) -> MatchResult {
    log::debug!("Matching load {} against {} trailers", load, catalog.len());

    for strategy in MatchStrategy::ALL {
        let trailers = strategy.candidates(catalog, load);
        if !trailers.is_empty() {
            log::debug!("Strategy '{}' produced {} trailers", strategy, trailers.len());
            return MatchResult::new(strategy, trailers, load);
        }
        log::debug!("Strategy '{}' produced nothing, falling through", strategy);
    }

    MatchResult::new(MatchStrategy::ClosestAlternative, Vec::new(), load)
}

/// Specialized trailers sharing a tag with `needs`; all specialized trailers
/// when `needs` is empty
pub fn find_specialized_trailers(catalog: &TrailerCatalog, needs: &[&str]) -> Vec<TrailerSpec> {
    catalog
        .iter()
        .filter(|t| t.is_specialized())
        .filter(|t| needs.is_empty() || needs.iter().any(|need| t.is_specialized_for(need)))
        .cloned()
        .collect()
}

/// Average per-dimension fit: 1.0 where the trailer suffices, else
/// `max / load`, doubled for specialized trailers on oversized loads
pub fn fit_score(trailer: &TrailerSpec, load: &LoadSpecification) -> f64 {
    let dimension_scores = [
        dimension_fit(trailer.max_length, load.length_ft),
        dimension_fit(trailer.max_width, load.width_ft),
        dimension_fit(trailer.max_height, load.height_ft),
        dimension_fit(trailer.max_weight, load.weight_lbs),
    ];
    let average = dimension_scores.iter().sum::<f64>() / dimension_scores.len() as f64;

    if load.is_oversized() && trailer.is_specialized() {
        average * SPECIALIZATION_BONUS
    } else {
        average
    }
}

fn dimension_fit(capacity: f64, required: f64) -> f64 {
    if capacity >= required {
        1.0
    } else {
        capacity / required
    }
}

fn extreme_length_candidates(catalog: &TrailerCatalog, load: &LoadSpecification) -> Vec<TrailerSpec> {
    let length = load.length_ft;
    let mut candidates: Vec<TrailerSpec> = catalog
        .iter()
        .filter(|t| t.is_specialized_for(TAG_OVERLENGTH) || t.max_length >= length)
        .cloned()
        .collect();

    candidates.sort_by(|a, b| {
        long_haul_rank(a.trailer_type)
            .cmp(&long_haul_rank(b.trailer_type))
            .then_with(|| closest_length(a, b, length))
    });
    candidates
}

fn long_haul_rank(trailer_type: TrailerType) -> u8 {
    match trailer_type {
        TrailerType::Schnabel => 0,
        TrailerType::Extendable => 1,
        _ => 2,
    }
}

/// Sufficient lengths first, shortest sufficient first; then the longest
/// of the insufficient ones
fn closest_length(a: &TrailerSpec, b: &TrailerSpec, length: f64) -> Ordering {
    match (a.max_length >= length, b.max_length >= length) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => a.max_length.total_cmp(&b.max_length),
        (false, false) => b.max_length.total_cmp(&a.max_length),
    }
}

fn very_oversized_candidates(catalog: &TrailerCatalog, load: &LoadSpecification) -> Vec<TrailerSpec> {
    let length_bound = load.length_ft > VERY_OVERSIZED_LENGTH_FT;
    let width_bound = load.width_ft > VERY_OVERSIZED_WIDTH_FT;
    let height_bound = load.height_ft > VERY_OVERSIZED_HEIGHT_FT;
    let weight_bound = load.weight_lbs > VERY_OVERSIZED_WEIGHT_LBS;

    let mut needs = Vec::new();
    if length_bound {
        needs.push(TAG_OVERLENGTH);
    }
    if width_bound {
        needs.push(TAG_OVERSIZED);
    }
    if height_bound {
        needs.push(TAG_OVERHEIGHT);
    }
    if weight_bound {
        needs.push(TAG_OVERWEIGHT);
    }
    log::debug!("Very oversized load needs {:?}", needs);

    let mut candidates = find_specialized_trailers(catalog, &needs);
    candidates.sort_by(|a, b| {
        let mut order = Ordering::Equal;
        if length_bound {
            order = order.then_with(|| sufficient_first(a.max_length, b.max_length, load.length_ft));
        }
        if width_bound {
            order = order.then_with(|| sufficient_first(a.max_width, b.max_width, load.width_ft));
        }
        if height_bound {
            order = order.then_with(|| sufficient_first(a.max_height, b.max_height, load.height_ft));
        }
        if weight_bound {
            order = order.then_with(|| {
                let (a_short, a_distance) = capacity_closeness(a.max_weight, load.weight_lbs);
                let (b_short, b_distance) = capacity_closeness(b.max_weight, load.weight_lbs);
                a_short.cmp(&b_short).then(a_distance.total_cmp(&b_distance))
            });
        }
        order
    });
    candidates
}

fn sufficient_first(a_capacity: f64, b_capacity: f64, required: f64) -> Ordering {
    (b_capacity >= required).cmp(&(a_capacity >= required))
}

/// Sort key for `capacity / required`: ratios at or above 1 before ratios
/// below 1, each group by distance from 1
fn capacity_closeness(capacity: f64, required: f64) -> (bool, f64) {
    let ratio = capacity / required;
    (ratio < 1.0, (ratio - 1.0).abs())
}

fn exact_fit_candidates(catalog: &TrailerCatalog, load: &LoadSpecification) -> Vec<TrailerSpec> {
    let oversized = load.is_oversized();
    let mut candidates: Vec<TrailerSpec> = catalog.iter().filter(|t| t.fits(load)).cloned().collect();

    candidates.sort_by(|a, b| {
        let specialization = if oversized {
            b.is_specialized().cmp(&a.is_specialized())
        } else {
            Ordering::Equal
        };
        specialization
            .then_with(|| (a.max_length - load.length_ft).total_cmp(&(b.max_length - load.length_ft)))
            .then_with(|| (a.max_weight - load.weight_lbs).total_cmp(&(b.max_weight - load.weight_lbs)))
    });
    candidates
}

fn closest_alternatives(catalog: &TrailerCatalog, load: &LoadSpecification) -> Vec<TrailerSpec> {
    let mut scored: Vec<(f64, &TrailerSpec)> = catalog.iter().map(|t| (fit_score(t, load), t)).collect();
    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));

    scored
        .into_iter()
        .take(MAX_CLOSEST_ALTERNATIVES)
        .map(|(_, t)| t.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(result: &[TrailerSpec]) -> Vec<&str> {
        result.iter().map(|t| t.id.as_str()).collect()
    }

    fn custom_trailer(id: &str, trailer_type: TrailerType, envelope: [f64; 4], tags: &[&str]) -> TrailerSpec {
        TrailerSpec {
            id: id.to_string(),
            name: id.to_string(),
            trailer_type,
            max_length: envelope[0],
            max_width: envelope[1],
            max_height: envelope[2],
            max_weight: envelope[3],
            features: Vec::new(),
            specialized_for: if tags.is_empty() {
                None
            } else {
                Some(tags.iter().map(|t| t.to_string()).collect())
            },
        }
    }

    #[test]
    fn test_standard_load_tightest_length_first() {
        let catalog = TrailerCatalog::builtin();
        let load = LoadSpecification::new(40.0, 8.0, 8.0, 40_000.0);
        let result = match_trailers(&catalog, &load);

        assert_eq!(result.strategy, MatchStrategy::ExactFit);
        assert!(result.is_exact());
        assert_eq!(&ids(&result.trailers)[..3], &["flatbed-48", "lowboy-48", "rgn-basic"]);
        assert_eq!(result.trailers.last().unwrap().id, "schnabel-trailer");
    }

    #[test]
    fn test_exact_fit_only_returns_fitting_trailers() {
        let catalog = TrailerCatalog::builtin();
        let loads = [
            LoadSpecification::new(40.0, 8.0, 8.0, 40_000.0),
            LoadSpecification::new(52.0, 8.5, 9.5, 44_000.0),
            LoadSpecification::new(50.0, 9.5, 9.0, 60_000.0),
            LoadSpecification::new(60.0, 8.5, 10.0, 90_000.0),
        ];
        for load in loads {
            let result = match_trailers(&catalog, &load);
            assert_eq!(result.strategy, MatchStrategy::ExactFit, "load {}", load);
            assert!(result.trailers.iter().all(|t| t.fits(&load)), "load {}", load);
        }
    }

    #[test]
    fn test_same_length_breaks_tie_on_weight_slack() {
        let catalog = TrailerCatalog::builtin();
        let load = LoadSpecification::new(52.0, 8.5, 9.0, 42_000.0);
        let result = match_trailers(&catalog, &load);
        // All 53' trailers: reefer has the least spare weight
        assert_eq!(&ids(&result.trailers)[..3], &["reefer-53", "dry-van-53", "step-deck-53"]);
    }

    #[test]
    fn test_oversized_prefers_specialized() {
        let catalog = TrailerCatalog::new(vec![
            custom_trailer("plain-60", TrailerType::Flatbed, [60.0, 9.0, 9.0, 90_000.0], &[]),
            custom_trailer("special-70", TrailerType::Rgn, [70.0, 9.0, 9.0, 90_000.0], &["Oversized loads"]),
        ])
        .unwrap();
        let load = LoadSpecification::new(50.0, 8.8, 8.0, 50_000.0);
        let result = match_trailers(&catalog, &load);
        assert_eq!(ids(&result.trailers), vec!["special-70", "plain-60"]);

        // Not oversized: purely by length slack
        let load = LoadSpecification::new(50.0, 8.0, 8.0, 50_000.0);
        let result = match_trailers(&catalog, &load);
        assert_eq!(ids(&result.trailers), vec!["plain-60", "special-70"]);
    }

    #[test]
    fn test_extreme_length_schnabel_first() {
        let catalog = TrailerCatalog::builtin();
        let load = LoadSpecification::new(150.0, 10.0, 10.0, 100_000.0);
        let result = match_trailers(&catalog, &load);

        assert_eq!(result.strategy, MatchStrategy::ExtremeLength);
        assert_eq!(result.best().unwrap().trailer_type, TrailerType::Schnabel);
        assert_eq!(ids(&result.trailers), vec!["schnabel-trailer", "extendable-flatbed"]);
    }

    #[test]
    fn test_fast_path_with_fitting_trailer_is_exact() {
        let catalog = TrailerCatalog::builtin();
        let load = LoadSpecification::new(150.0, 10.0, 10.0, 100_000.0);
        let result = match_trailers(&catalog, &load);

        assert_eq!(result.strategy, MatchStrategy::ExtremeLength);
        assert!(result.best().unwrap().fits(&load));
        assert!(result.is_exact());
    }

    #[test]
    fn test_fast_path_without_fitting_trailer_is_not_exact() {
        let catalog = TrailerCatalog::builtin();
        // Wider than any schnabel or extendable
        let load = LoadSpecification::new(150.0, 30.0, 10.0, 100_000.0);
        let result = match_trailers(&catalog, &load);

        assert_eq!(result.strategy, MatchStrategy::ExtremeLength);
        assert!(!result.is_exact());
    }

    #[test]
    fn test_extreme_length_falls_through_without_long_trailers() {
        let catalog = TrailerCatalog::new(vec![
            custom_trailer("flat-48", TrailerType::Flatbed, [48.0, 8.5, 8.5, 48_000.0], &[]),
            custom_trailer("step-53", TrailerType::StepDeck, [53.0, 8.5, 10.0, 48_000.0], &[]),
        ])
        .unwrap();
        let load = LoadSpecification::new(120.0, 8.0, 8.0, 30_000.0);
        assert!(MatchStrategy::ExtremeLength.candidates(&catalog, &load).is_empty());

        // Very oversized by length, but nobody is tagged for it; no trailer fits either
        let result = match_trailers(&catalog, &load);
        assert_eq!(result.strategy, MatchStrategy::ClosestAlternative);
        assert!(!result.is_empty());
        assert!(!result.is_exact());
        assert_eq!(ids(&result.trailers), vec!["step-53", "flat-48"]);
    }

    #[test]
    fn test_extreme_length_without_schnabel_uses_extendable() {
        let catalog = TrailerCatalog::new(vec![
            custom_trailer("flat", TrailerType::Flatbed, [48.0, 8.5, 8.5, 48_000.0], &[]),
            custom_trailer("ext-90", TrailerType::Extendable, [90.0, 8.5, 8.5, 65_000.0], &["Overlength loads"]),
            custom_trailer("ext-120", TrailerType::Extendable, [120.0, 8.5, 8.5, 65_000.0], &["Overlength loads"]),
            custom_trailer("ext-160", TrailerType::Extendable, [160.0, 8.5, 8.5, 65_000.0], &["Overlength loads"]),
        ])
        .unwrap();

        // Sufficient: smallest sufficient first, then largest insufficient
        let load = LoadSpecification::new(110.0, 8.0, 8.0, 30_000.0);
        let result = match_trailers(&catalog, &load);
        assert_eq!(ids(&result.trailers), vec!["ext-120", "ext-160", "ext-90"]);

        // None sufficient: largest first
        let load = LoadSpecification::new(170.0, 8.0, 8.0, 30_000.0);
        let result = match_trailers(&catalog, &load);
        assert_eq!(ids(&result.trailers), vec!["ext-160", "ext-120", "ext-90"]);
    }

    #[test]
    fn test_very_oversized_weight_ranks_by_capacity_ratio() {
        let catalog = TrailerCatalog::new(vec![
            custom_trailer("heavy-150", TrailerType::Rgn, [60.0, 8.5, 10.0, 150_000.0], &["Overweight loads"]),
            custom_trailer("heavy-400", TrailerType::Rgn, [60.0, 8.5, 10.0, 400_000.0], &["Overweight loads"]),
            custom_trailer("heavy-200", TrailerType::Rgn, [60.0, 8.5, 10.0, 200_000.0], &["Overweight loads"]),
            custom_trailer("flat", TrailerType::Flatbed, [48.0, 8.5, 8.5, 48_000.0], &[]),
        ])
        .unwrap();
        let load = LoadSpecification::new(40.0, 8.0, 8.0, 180_000.0);
        let result = match_trailers(&catalog, &load);

        assert_eq!(result.strategy, MatchStrategy::VeryOversized);
        // 200k (ratio 1.11) and 400k (2.22) cover the load; 150k (0.83) does not
        assert_eq!(ids(&result.trailers), vec!["heavy-200", "heavy-400", "heavy-150"]);
    }

    #[test]
    fn test_very_oversized_builtin_weight() {
        let catalog = TrailerCatalog::builtin();
        let load = LoadSpecification::new(60.0, 8.5, 8.5, 150_000.0);
        let result = match_trailers(&catalog, &load);
        assert_eq!(result.strategy, MatchStrategy::VeryOversized);
        assert_eq!(ids(&result.trailers), vec!["rgn-multi-axle"]);
    }

    #[test]
    fn test_very_oversized_height_sufficient_first() {
        let catalog = TrailerCatalog::builtin();
        let load = LoadSpecification::new(40.0, 8.5, 14.5, 40_000.0);
        let result = match_trailers(&catalog, &load);
        assert_eq!(result.strategy, MatchStrategy::VeryOversized);
        // Neither covers 14.5'; catalog order is kept
        assert_eq!(ids(&result.trailers), vec!["double-drop-53", "perimeter-trailer"]);

        let catalog = TrailerCatalog::new(vec![
            custom_trailer("low", TrailerType::Lowboy, [53.0, 8.5, 12.0, 100_000.0], &["Overheight loads"]),
            custom_trailer("tall", TrailerType::Perimeter, [53.0, 10.0, 16.0, 100_000.0], &["Overheight loads"]),
        ])
        .unwrap();
        let result = match_trailers(&catalog, &load);
        assert_eq!(ids(&result.trailers), vec!["tall", "low"]);
    }

    #[test]
    fn test_very_oversized_length_sufficient_first() {
        let catalog = TrailerCatalog::new(vec![
            custom_trailer("ext-80", TrailerType::Extendable, [80.0, 8.5, 8.5, 65_000.0], &["Overlength loads"]),
            custom_trailer("ext-95", TrailerType::Extendable, [95.0, 8.5, 8.5, 65_000.0], &["Overlength loads"]),
        ])
        .unwrap();
        let load = LoadSpecification::new(90.0, 8.0, 8.0, 40_000.0);
        let result = match_trailers(&catalog, &load);
        assert_eq!(result.strategy, MatchStrategy::VeryOversized);
        assert_eq!(ids(&result.trailers), vec!["ext-95", "ext-80"]);
    }

    #[test]
    fn test_very_oversized_falls_through_without_specialists() {
        let catalog = TrailerCatalog::new(vec![
            custom_trailer("wide", TrailerType::Flatbed, [60.0, 12.0, 9.0, 60_000.0], &[]),
        ])
        .unwrap();
        let load = LoadSpecification::new(40.0, 11.0, 8.0, 40_000.0);
        let result = match_trailers(&catalog, &load);
        assert_eq!(result.strategy, MatchStrategy::ExactFit);
        assert_eq!(ids(&result.trailers), vec!["wide"]);
    }

    #[test]
    fn test_closest_alternatives_top_five() {
        let catalog = TrailerCatalog::new(vec![
            custom_trailer("a", TrailerType::Flatbed, [20.0, 8.0, 8.0, 20_000.0], &[]),
            custom_trailer("b", TrailerType::Flatbed, [30.0, 8.0, 8.0, 20_000.0], &[]),
            custom_trailer("c", TrailerType::Flatbed, [40.0, 8.0, 8.0, 20_000.0], &[]),
            custom_trailer("d", TrailerType::Flatbed, [50.0, 8.0, 8.0, 20_000.0], &[]),
            custom_trailer("e", TrailerType::Flatbed, [55.0, 8.0, 8.0, 20_000.0], &[]),
            custom_trailer("f", TrailerType::Flatbed, [58.0, 8.0, 8.0, 20_000.0], &[]),
        ])
        .unwrap();
        let load = LoadSpecification::new(60.0, 8.0, 8.0, 20_000.0);
        let result = match_trailers(&catalog, &load);

        assert_eq!(result.strategy, MatchStrategy::ClosestAlternative);
        assert!(!result.is_exact());
        assert_eq!(result.len(), MAX_CLOSEST_ALTERNATIVES);
        assert_eq!(ids(&result.trailers), vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn test_fit_score() {
        let trailer = custom_trailer("t", TrailerType::Flatbed, [40.0, 8.0, 8.0, 40_000.0], &[]);
        let load = LoadSpecification::new(80.0, 8.0, 8.0, 40_000.0);
        // (0.5 + 1 + 1 + 1) / 4
        assert!((fit_score(&trailer, &load) - 0.875).abs() < 1e-9);

        let special = custom_trailer("s", TrailerType::Rgn, [40.0, 8.0, 8.0, 40_000.0], &["Overlength loads"]);
        assert!((fit_score(&special, &load) - 1.75).abs() < 1e-9);

        let small_load = LoadSpecification::new(30.0, 8.0, 8.0, 40_000.0);
        assert!((fit_score(&special, &small_load) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_never_empty_for_builtin_catalog() {
        let catalog = TrailerCatalog::builtin();
        for length in [10.0, 48.0, 66.0, 90.0, 120.0, 250.0] {
            for width in [6.0, 8.5, 9.5, 11.0, 13.0, 20.0] {
                for height in [6.0, 9.0, 13.0, 14.5, 20.0] {
                    for weight in [1_000.0, 50_000.0, 90_000.0, 130_000.0, 600_000.0] {
                        let load = LoadSpecification::new(length, width, height, weight);
                        assert!(!match_trailers(&catalog, &load).is_empty(), "load {}", load);
                    }
                }
            }
        }
    }

    #[test]
    fn test_find_specialized_trailers() {
        let catalog = TrailerCatalog::builtin();
        assert_eq!(find_specialized_trailers(&catalog, &[]).len(), 6);
        let overheight = find_specialized_trailers(&catalog, &["Overheight loads"]);
        assert_eq!(ids(&overheight), vec!["double-drop-53", "perimeter-trailer"]);
        assert!(find_specialized_trailers(&catalog, &["Livestock"]).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let catalog = TrailerCatalog::builtin();
        let load = LoadSpecification::new(55.0, 9.0, 12.0, 95_000.0);
        assert_eq!(match_trailers(&catalog, &load), match_trailers(&catalog, &load));
    }
}
