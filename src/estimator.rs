//! Cost estimation for catalogue plans.
//!
//! An estimate is the plan's base price, plus the price of every square
//! metre above the base surface, plus the fixed price of each selected
//! option. Amounts are whole FCFA.

use std::collections::BTreeSet;

use crate::catalog::{option_by_key, ArchitecturalPlan, OptionKey};

/// Surface slider bounds for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

pub const SURFACE_STEP: u32 = 10;
const SURFACE_MAX_FACTOR: u32 = 3;

impl SurfaceRange {
    #[must_use]
    pub fn for_plan(plan: &ArchitecturalPlan) -> Self {
        Self {
            min: plan.base_surface,
            max: plan.base_surface.saturating_mul(SURFACE_MAX_FACTOR),
            step: SURFACE_STEP,
        }
    }

    #[must_use]
    pub fn clamp(&self, surface: u32) -> u32 {
        surface.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn step_up(&self, surface: u32) -> u32 {
        self.clamp(surface.saturating_add(self.step))
    }

    #[must_use]
    pub fn step_down(&self, surface: u32) -> u32 {
        self.clamp(surface.saturating_sub(self.step))
    }
}

/// Options chosen for an estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<OptionKey>);

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the option if absent, removes it otherwise.
    pub fn toggle(&mut self, key: OptionKey) {
        if !self.0.remove(&key) {
            self.0.insert(key);
        }
    }

    #[must_use]
    pub fn contains(&self, key: OptionKey) -> bool {
        self.0.contains(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = OptionKey> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<OptionKey> for Selection {
    fn from_iter<I: IntoIterator<Item = OptionKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One selected option as it appears in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionLine {
    pub key: OptionKey,
    pub label: &'static str,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estimate {
    pub base_price: u64,
    pub base_surface: u32,
    pub surface: u32,
    pub extra_surface: u32,
    pub surface_price: u64,
    pub options: Vec<OptionLine>,
    pub options_total: u64,
    pub total: u64,
}

#[must_use]
pub fn estimate(plan: &ArchitecturalPlan, surface: u32, selection: &Selection) -> Estimate {
    let extra_surface = surface.saturating_sub(plan.base_surface);
    let surface_price = u64::from(extra_surface).saturating_mul(plan.price_per_m2);

    let options: Vec<OptionLine> = selection
        .iter()
        .filter_map(option_by_key)
        .map(|o| OptionLine {
            key: o.key,
            label: o.label,
            price: o.price,
        })
        .collect();
    let options_total = options
        .iter()
        .fold(0u64, |sum, o| sum.saturating_add(o.price));

    Estimate {
        base_price: plan.base_price,
        base_surface: plan.base_surface,
        surface,
        extra_surface,
        surface_price,
        options,
        options_total,
        total: plan
            .base_price
            .saturating_add(surface_price)
            .saturating_add(options_total),
    }
}

/// Formats an amount the way French locales do, e.g. `1 500 000 FCFA`.
///
/// Groups are separated by a narrow no-break space (U+202F).
#[must_use]
pub fn format_fcfa(amount: u64) -> String {
    format!("{} FCFA", group_thousands(amount))
}

#[must_use]
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{202f}');
        }
        out.push(c);
    }
    out
}

/// Link to the contact page carrying the plan, surface and total.
#[must_use]
pub fn contact_link(plan: &ArchitecturalPlan, estimate: &Estimate) -> String {
    format!(
        "/contact?plan={}&surface={}&total={}",
        urlencoding::encode(plan.name),
        estimate.surface,
        estimate.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{plan_by_id, plan_options, plans};

    fn villa() -> &'static ArchitecturalPlan {
        plan_by_id("villa-emeraude").unwrap()
    }

    #[test]
    fn base_surface_costs_base_price() {
        let plan = villa();
        let est = estimate(plan, plan.base_surface, &Selection::new());
        assert_eq!(est.extra_surface, 0);
        assert_eq!(est.surface_price, 0);
        assert_eq!(est.options_total, 0);
        assert_eq!(est.total, plan.base_price);
    }

    #[test]
    fn surface_below_base_adds_nothing() {
        for plan in plans() {
            for surface in 0..=plan.base_surface {
                let est = estimate(plan, surface, &Selection::new());
                assert_eq!(est.extra_surface, 0);
                assert_eq!(est.surface_price, 0);
            }
        }
    }

    #[test]
    fn extra_surface_priced_per_square_metre() {
        let plan = villa();
        let est = estimate(plan, 180, &Selection::new());
        assert_eq!(est.extra_surface, 30);
        assert_eq!(est.surface_price, 30 * 150_000);
        assert_eq!(est.total, 25_000_000 + 4_500_000);
    }

    #[test]
    fn options_add_their_prices() {
        let plan = villa();
        let selection: Selection = [OptionKey::Piscine, OptionKey::Forage].into_iter().collect();
        let est = estimate(plan, 160, &selection);

        assert_eq!(est.options.len(), 2);
        assert_eq!(est.options_total, 4_500_000 + 1_200_000);
        assert_eq!(est.total, 25_000_000 + 10 * 150_000 + 5_700_000);
    }

    #[test]
    fn total_non_decreasing_in_surface() {
        for plan in plans() {
            let range = SurfaceRange::for_plan(plan);
            let mut previous = 0;
            let mut surface = 0;
            while surface <= range.max {
                let total = estimate(plan, surface, &Selection::new()).total;
                assert!(total >= previous, "{} at {surface} m²", plan.id);
                previous = total;
                surface += 5;
            }
        }
    }

    #[test]
    fn total_non_decreasing_in_selected_options() {
        let plan = villa();
        let mut selection = Selection::new();
        let mut previous = estimate(plan, 200, &selection).total;
        for option in plan_options() {
            selection.toggle(option.key);
            let total = estimate(plan, 200, &selection).total;
            assert!(total >= previous);
            previous = total;
        }
    }

    #[test]
    fn toggle_twice_removes_option() {
        let mut selection = Selection::new();
        selection.toggle(OptionKey::Garage);
        assert!(selection.contains(OptionKey::Garage));
        selection.toggle(OptionKey::Garage);
        assert!(selection.is_empty());
    }

    #[test]
    fn surface_range_bounds_and_steps() {
        let range = SurfaceRange::for_plan(villa());
        assert_eq!(range.min, 150);
        assert_eq!(range.max, 450);

        assert_eq!(range.step_down(150), 150);
        assert_eq!(range.step_down(155), 150);
        assert_eq!(range.step_up(150), 160);
        assert_eq!(range.step_up(445), 450);
        assert_eq!(range.step_up(450), 450);
        assert_eq!(range.clamp(10), 150);
    }

    #[test]
    fn format_fcfa_groups_thousands() {
        assert_eq!(format_fcfa(0), "0 FCFA");
        assert_eq!(format_fcfa(950), "950 FCFA");
        assert_eq!(format_fcfa(1_500), "1\u{202f}500 FCFA");
        assert_eq!(format_fcfa(25_000_000), "25\u{202f}000\u{202f}000 FCFA");
        assert_eq!(format_fcfa(150_000), "150\u{202f}000 FCFA");
    }

    #[test]
    fn contact_link_encodes_plan_name() {
        let plan = villa();
        let est = estimate(plan, 170, &Selection::new());
        assert_eq!(
            contact_link(plan, &est),
            "/contact?plan=Villa%20%C3%89meraude&surface=170&total=28000000"
        );
    }
}
