//! Validation rules shared by the mutation entry points.
//!
//! Each rule checks one invariant over a proposed state and reports the
//! first offender it finds. The engine builds a scratch copy, runs the
//! rules that apply to the operation, and only then swaps the scratch in,
//! so a failed mutation leaves no trace.

use std::collections::HashSet;
use unicase::UniCase;

use crate::error::LoadOrderError;
use crate::models::{PluginRecord, names_eq};
use crate::oracle::PluginOracle;
use crate::profile::GameProfile;

/// Every name must be an installed, valid plugin.
pub(crate) fn validate_all_valid(
    names: &[&str],
    oracle: &dyn PluginOracle,
) -> Result<(), LoadOrderError> {
    for name in names {
        if !oracle.is_valid(name) {
            return Err(LoadOrderError::InvalidPlugin((*name).to_string()));
        }
    }
    Ok(())
}

/// No two names may collide case-insensitively.
pub(crate) fn validate_unique(names: &[&str]) -> Result<(), LoadOrderError> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(UniCase::new(*name)) {
            return Err(LoadOrderError::DuplicatePlugin((*name).to_string()));
        }
    }
    Ok(())
}

/// Masters must precede non-masters.
pub(crate) fn validate_partition(records: &[PluginRecord]) -> Result<(), LoadOrderError> {
    let mut first_non_master: Option<&PluginRecord> = None;
    for record in records {
        if record.is_master() {
            if let Some(non_master) = first_non_master {
                return Err(LoadOrderError::OrderingViolation(
                    non_master.name().to_string(),
                ));
            }
        } else if first_non_master.is_none() {
            first_non_master = Some(record);
        }
    }
    Ok(())
}

/// Under pinning methods the first position belongs to the game master:
/// nothing else may be asked to load there, and the master may be sent
/// nowhere else once the order holds plugins. On an empty order the master
/// is accepted at any position, since the insertion clamps to the front.
/// Judged on the requested position.
pub(crate) fn validate_slot_zero(
    profile: &GameProfile,
    name: &str,
    position: usize,
    order_is_empty: bool,
) -> Result<(), LoadOrderError> {
    if !profile.pins_master() {
        return Ok(());
    }
    if names_eq(name, &profile.master_file) {
        if position != 0 && !order_is_empty {
            return Err(LoadOrderError::ForcedPositionViolation(
                profile.master_file.clone(),
            ));
        }
    } else if position == 0 {
        return Err(LoadOrderError::ForcedPositionViolation(
            profile.master_file.clone(),
        ));
    }
    Ok(())
}

/// A full order replacement under a pinning method must start with the game
/// master.
pub(crate) fn validate_starts_with_master(
    profile: &GameProfile,
    names: &[&str],
) -> Result<(), LoadOrderError> {
    if !profile.pins_master() {
        return Ok(());
    }
    match names.first() {
        Some(first) if names_eq(first, &profile.master_file) => Ok(()),
        _ => Err(LoadOrderError::ForcedPositionViolation(
            profile.master_file.clone(),
        )),
    }
}

/// A full active-set replacement must keep the forced-active plugins: the
/// pinned game master, and the auxiliary master while it is installed.
///
/// Replacing an empty order with an empty active set is allowed; there is
/// nothing for the master to load before.
pub(crate) fn validate_forced_active_listed(
    profile: &GameProfile,
    oracle: &dyn PluginOracle,
    names: &[&str],
    order_is_empty: bool,
) -> Result<(), LoadOrderError> {
    let listed = |target: &str| names.iter().any(|name| names_eq(name, target));
    if profile.pins_master()
        && !(names.is_empty() && order_is_empty)
        && !listed(&profile.master_file)
    {
        return Err(LoadOrderError::ForcedActiveViolation(
            profile.master_file.clone(),
        ));
    }
    if let Some(aux) = profile.auxiliary_master() {
        if oracle.is_valid(aux) && !listed(aux) {
            return Err(LoadOrderError::ForcedActiveViolation(aux.to_string()));
        }
    }
    Ok(())
}

/// Forced-active plugins cannot be deactivated.
pub(crate) fn validate_can_deactivate(
    profile: &GameProfile,
    oracle: &dyn PluginOracle,
    name: &str,
) -> Result<(), LoadOrderError> {
    if profile.pins_master() && names_eq(name, &profile.master_file) {
        return Err(LoadOrderError::ForcedActiveViolation(
            profile.master_file.clone(),
        ));
    }
    if let Some(aux) = profile.auxiliary_master() {
        if names_eq(name, aux) && oracle.is_valid(aux) {
            return Err(LoadOrderError::ForcedActiveViolation(aux.to_string()));
        }
    }
    Ok(())
}

/// No more than [`MAX_ACTIVE_PLUGINS`](crate::MAX_ACTIVE_PLUGINS) plugins
/// may be active.
pub(crate) fn validate_active_count(count: usize) -> Result<(), LoadOrderError> {
    if count > crate::MAX_ACTIVE_PLUGINS {
        return Err(LoadOrderError::ActiveLimitExceeded);
    }
    Ok(())
}
