// BCLS Star Mapper
// Maps segmented digit groups onto the star taxonomy

use crate::taxonomy::Catalog;
use crate::types::{EnergyTier, SegmentedGroup, Star, StarMatch};
use rustc_hash::FxHashMap;

/// Base energy assigned to groups that match no taxonomy entry.
pub const UNKNOWN_BASE_ENERGY: f64 = 1.0;

/// Per-star response-weighting factors.
///
/// Every shipped value is 1.0. The table exists so individual stars can be
/// re-weighted from observed feedback without touching mapping logic; keep
/// it a table, not a constant.
#[derive(Debug, Clone)]
pub struct ResponseFactors {
    factors: FxHashMap<Star, f64>,
}

impl ResponseFactors {
    /// Create the default table: factor 1.0 for every star.
    pub fn new() -> Self {
        let mut factors = FxHashMap::default();
        for star in Star::ALL {
            factors.insert(star, 1.0);
        }
        Self { factors }
    }

    /// Override the factor for one star.
    ///
    /// # Example
    /// ```
    /// # use bcls::mapper::ResponseFactors;
    /// # use bcls::Star;
    /// let factors = ResponseFactors::new().with_factor(Star::TuyetMenh, 1.2);
    /// assert_eq!(factors.factor(Star::TuyetMenh), 1.2);
    /// ```
    pub fn with_factor(mut self, star: Star, factor: f64) -> Self {
        self.factors.insert(star, factor);
        self
    }

    /// Factor for a star; unknown identities weigh 1.0.
    pub fn factor(&self, star: Star) -> f64 {
        self.factors.get(&star).copied().unwrap_or(1.0)
    }
}

impl Default for ResponseFactors {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps segmented groups to star matches.
///
/// Pure over the static catalog plus the group: no side effects, safe to
/// share across threads.
#[derive(Debug, Clone)]
pub struct StarMapper {
    catalog: Catalog,
    factors: ResponseFactors,
}

impl StarMapper {
    pub fn new(catalog: Catalog, factors: ResponseFactors) -> Self {
        Self { catalog, factors }
    }

    /// The underlying star catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Map one group to its star match.
    ///
    /// A clean core that matches no catalog entry degrades to
    /// [`Star::Unknown`] with base energy 1 instead of failing: a single
    /// unrecognized group must never abort a whole analysis.
    ///
    /// `position` is the 1-based index of the group in its sequence.
    pub fn map_group(&self, group: &SegmentedGroup, position: usize) -> StarMatch {
        let definition = self.catalog.star_for(&group.clean);

        let (star, name, description, base_energy) = match definition {
            Some(def) => (
                def.star,
                def.name.to_string(),
                def.description.to_string(),
                def.energy_for(&group.clean).unwrap_or(UNKNOWN_BASE_ENERGY),
            ),
            None => (Star::Unknown, String::new(), String::new(), UNKNOWN_BASE_ENERGY),
        };

        // Energy floor: zeros can never push a group below 1.
        let adjusted_energy =
            (base_energy + group.five_count as f64 - group.zero_count as f64).max(1.0);

        // A raw group that is a known zero code reports the twin's
        // degraded nature; the energy arithmetic stays on the base table.
        let nature = if group.zero_count > 0 {
            self.catalog
                .zero_variant_for(&group.raw)
                .map(|twin| twin.nature)
                .or(definition.map(|def| def.nature))
        } else {
            definition.map(|def| def.nature)
        };

        let response_factor = self.factors.factor(star);

        StarMatch {
            raw: group.raw.clone(),
            clean: group.clean.clone(),
            position,
            star,
            name,
            nature,
            description,
            base_energy,
            zero_count: group.zero_count,
            five_count: group.five_count,
            adjusted_energy,
            tier: EnergyTier::from_energy(adjusted_energy),
            is_zero_variant: group.zero_count > 0,
            response_factor,
            weighted_energy: adjusted_energy * response_factor,
        }
    }

    /// Map an ordered group sequence, assigning 1-based positions.
    pub fn map_sequence(&self, groups: &[SegmentedGroup]) -> Vec<StarMatch> {
        groups
            .iter()
            .enumerate()
            .map(|(idx, group)| self.map_group(group, idx + 1))
            .collect()
    }
}

impl Default for StarMapper {
    fn default() -> Self {
        Self::new(Catalog::new(), ResponseFactors::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StarNature;

    fn mapper() -> StarMapper {
        StarMapper::default()
    }

    #[test]
    fn test_plain_pair_mapping() {
        let group = SegmentedGroup::from_raw("47");
        let m = mapper().map_group(&group, 1);

        assert_eq!(m.star, Star::TuyetMenh);
        assert_eq!(m.name, "Tuyệt Mệnh");
        assert_eq!(m.base_energy, 3.0);
        assert_eq!(m.adjusted_energy, 3.0);
        assert_eq!(m.tier, EnergyTier::High);
        assert!(!m.is_zero_variant);
    }

    #[test]
    fn test_zero_reduces_energy() {
        // "98" alone has base 3; the embedded zero drops it to 2
        let plain = mapper().map_group(&SegmentedGroup::from_raw("98"), 1);
        let zeroed = mapper().map_group(&SegmentedGroup::from_raw("908"), 1);

        assert_eq!(plain.adjusted_energy, 3.0);
        assert_eq!(zeroed.star, Star::HoaHai);
        assert_eq!(zeroed.adjusted_energy, 2.0);
        assert_eq!(zeroed.tier, EnergyTier::Medium);
        assert!(zeroed.is_zero_variant);
    }

    #[test]
    fn test_five_raises_energy() {
        let m = mapper().map_group(&SegmentedGroup::from_raw("958"), 1);
        assert_eq!(m.star, Star::HoaHai);
        assert_eq!(m.adjusted_energy, 4.0);
        assert_eq!(m.tier, EnergyTier::VeryHigh);
    }

    #[test]
    fn test_energy_floor() {
        // "28" has base 1; two zeros would push it negative without the floor
        let m = mapper().map_group(&SegmentedGroup::from_raw("2008"), 1);
        assert_eq!(m.star, Star::SinhKhi);
        assert_eq!(m.base_energy, 1.0);
        assert_eq!(m.adjusted_energy, 1.0);
        assert_eq!(m.tier, EnergyTier::Low);
    }

    #[test]
    fn test_unknown_fallback() {
        // 1-character clean core matches nothing
        let m = mapper().map_group(&SegmentedGroup::from_raw("70"), 1);
        assert_eq!(m.star, Star::Unknown);
        assert!(m.name.is_empty());
        assert_eq!(m.base_energy, 1.0);
        assert_eq!(m.adjusted_energy, 1.0);
    }

    #[test]
    fn test_zero_variant_nature_reported() {
        let m = mapper().map_group(&SegmentedGroup::from_raw("908"), 1);
        assert_eq!(m.nature, Some(StarNature::InauspiciousWorsened));

        let m = mapper().map_group(&SegmentedGroup::from_raw("104"), 1);
        assert_eq!(m.star, Star::SinhKhi);
        assert_eq!(m.nature, Some(StarNature::AuspiciousTurnedBad));
    }

    #[test]
    fn test_response_factor_applied() {
        let mapper = StarMapper::new(
            Catalog::new(),
            ResponseFactors::new().with_factor(Star::TuyetMenh, 1.5),
        );
        let m = mapper.map_group(&SegmentedGroup::from_raw("47"), 1);

        assert_eq!(m.adjusted_energy, 3.0);
        assert_eq!(m.response_factor, 1.5);
        assert_eq!(m.weighted_energy, 4.5);
    }

    #[test]
    fn test_default_factors_are_identity() {
        for star in Star::ALL {
            assert_eq!(ResponseFactors::new().factor(star), 1.0);
        }
        assert_eq!(ResponseFactors::new().factor(Star::Unknown), 1.0);
    }

    #[test]
    fn test_sequence_positions() {
        let groups = crate::segmenter::segment("4747");
        let matches = mapper().map_sequence(&groups);
        let positions: Vec<usize> = matches.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }
}
