//! Transient error presentation for blocked steps.
//!
//! Timers live in the component; this model only decides what is visible.
//! Every banner and flash gets a fresh id so that an expiry scheduled for an
//! older one cannot clear its replacement.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use super::state::Step;
use super::validation::StepValidation;

pub const BANNER_MESSAGE: &str = "Por favor complete todos los campos requeridos.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub step: Step,
}

/// Timer ids the caller must schedule after a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expiries {
    pub banner: u64,
    pub groups: Vec<(&'static str, u64)>,
}

#[derive(Debug, Default)]
pub struct ValidationFeedback {
    next_id: u64,
    banner: Option<Banner>,
    flagged_fields: BTreeSet<&'static str>,
    flashing_groups: BTreeMap<&'static str, u64>,
}

impl ValidationFeedback {
    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Records a failed validation. Returns `None` when there is nothing to show.
    pub fn report(&mut self, validation: &StepValidation) -> Option<Expiries> {
        if validation.is_valid() {
            return None;
        }

        self.flagged_fields.extend(validation.missing_fields.iter().copied());

        let mut groups = Vec::with_capacity(validation.missing_groups.len());
        for &group in &validation.missing_groups {
            let id = self.fresh_id();
            self.flashing_groups.insert(group, id);
            groups.push((group, id));
        }

        // A step shows at most one banner; the new one replaces the old.
        let id = self.fresh_id();
        self.banner = Some(Banner { id, step: validation.step });

        Some(Expiries { banner: id, groups })
    }

    pub fn banner_for(&self, step: Step) -> Option<&Banner> {
        self.banner.as_ref().filter(|b| b.step == step)
    }

    pub fn expire_banner(&mut self, id: u64) {
        if self.banner.is_some_and(|b| b.id == id) {
            self.banner = None;
        }
    }

    pub fn is_field_flagged(&self, name: &str) -> bool {
        self.flagged_fields.contains(name)
    }

    /// Drops the error style of a field on its next input. Returns whether it was flagged.
    pub fn clear_field(&mut self, name: &str) -> bool {
        self.flagged_fields.remove(name)
    }

    pub fn is_group_flashing(&self, name: &str) -> bool {
        self.flashing_groups.contains_key(name)
    }

    pub fn expire_group(&mut self, name: &str, id: u64) {
        if self.flashing_groups.get(name) == Some(&id) {
            self.flashing_groups.remove(name);
        }
    }
}
