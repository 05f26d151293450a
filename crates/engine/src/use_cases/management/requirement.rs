//! Requirement/argument sub-builder used inside the modifier editor.
//!
//! Requirements and their arguments are addressed by opaque handles rather
//! than positions. A handle is never reused, so removing one row can not make
//! a stale handle point at its neighbour.

use civmod_domain::{Argument, Requirement};

use super::ManagementError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequirementHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArgumentHandle(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
struct ArgumentEntry {
    handle: ArgumentHandle,
    name: String,
    value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RequirementEntry {
    handle: RequirementHandle,
    requirement_type: String,
    arguments: Vec<ArgumentEntry>,
}

/// Editable list of requirements, each with an editable list of arguments.
///
/// Entries keep insertion order. [`RequirementBuilder::collect`] reads the
/// current state without changing it and drops anything half filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementBuilder {
    entries: Vec<RequirementEntry>,
    next_handle: u64,
}

impl RequirementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder from saved requirements, e.g. when reopening a modifier.
    pub fn from_requirements(requirements: &[Requirement]) -> Self {
        let mut builder = Self::new();
        for requirement in requirements {
            let handle = RequirementHandle(builder.issue());
            let arguments = requirement
                .arguments
                .iter()
                .map(|argument| ArgumentEntry {
                    handle: ArgumentHandle(builder.issue()),
                    name: argument.name.clone(),
                    value: argument.value.clone(),
                })
                .collect();
            builder.entries.push(RequirementEntry {
                handle,
                requirement_type: requirement.requirement_type.clone(),
                arguments,
            });
        }
        builder
    }

    fn issue(&mut self) -> u64 {
        let id = self.next_handle;
        self.next_handle += 1;
        id
    }

    fn entry_mut(&mut self, handle: RequirementHandle) -> Option<&mut RequirementEntry> {
        self.entries.iter_mut().find(|e| e.handle == handle)
    }

    fn live_entry_mut(
        &mut self,
        handle: RequirementHandle,
    ) -> Result<&mut RequirementEntry, ManagementError> {
        self.entry_mut(handle)
            .ok_or(ManagementError::UnknownHandle("requirement"))
    }

    /// Append an empty requirement row.
    pub fn add_requirement(&mut self) -> RequirementHandle {
        let handle = RequirementHandle(self.issue());
        self.entries.push(RequirementEntry {
            handle,
            requirement_type: String::new(),
            arguments: Vec::new(),
        });
        handle
    }

    pub fn set_requirement_type(
        &mut self,
        handle: RequirementHandle,
        requirement_type: &str,
    ) -> Result<(), ManagementError> {
        self.live_entry_mut(handle)?.requirement_type = requirement_type.to_string();
        Ok(())
    }

    /// Drop a requirement row and all of its arguments.
    pub fn remove_requirement(&mut self, handle: RequirementHandle) -> Result<(), ManagementError> {
        let position = self
            .entries
            .iter()
            .position(|e| e.handle == handle)
            .ok_or(ManagementError::UnknownHandle("requirement"))?;
        self.entries.remove(position);
        Ok(())
    }

    /// Append an empty argument row to a requirement.
    pub fn add_argument(
        &mut self,
        requirement: RequirementHandle,
    ) -> Result<ArgumentHandle, ManagementError> {
        let handle = ArgumentHandle(self.issue());
        self.live_entry_mut(requirement)?.arguments.push(ArgumentEntry {
            handle,
            name: String::new(),
            value: String::new(),
        });
        Ok(handle)
    }

    pub fn set_argument(
        &mut self,
        requirement: RequirementHandle,
        argument: ArgumentHandle,
        name: &str,
        value: &str,
    ) -> Result<(), ManagementError> {
        let entry = self
            .live_entry_mut(requirement)?
            .arguments
            .iter_mut()
            .find(|a| a.handle == argument)
            .ok_or(ManagementError::UnknownHandle("argument"))?;
        entry.name = name.to_string();
        entry.value = value.to_string();
        Ok(())
    }

    pub fn remove_argument(
        &mut self,
        requirement: RequirementHandle,
        argument: ArgumentHandle,
    ) -> Result<(), ManagementError> {
        let arguments = &mut self.live_entry_mut(requirement)?.arguments;
        let position = arguments
            .iter()
            .position(|a| a.handle == argument)
            .ok_or(ManagementError::UnknownHandle("argument"))?;
        arguments.remove(position);
        Ok(())
    }

    /// Handles of live requirements, in display order.
    pub fn requirement_handles(&self) -> Vec<RequirementHandle> {
        self.entries.iter().map(|e| e.handle).collect()
    }

    /// Handles of a requirement's live arguments, in display order.
    pub fn argument_handles(&self, requirement: RequirementHandle) -> Vec<ArgumentHandle> {
        self.entries
            .iter()
            .find(|e| e.handle == requirement)
            .map(|e| e.arguments.iter().map(|a| a.handle).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Requirements as they should be stored on the modifier.
    ///
    /// Requirements with a blank type are skipped. Within a kept requirement,
    /// arguments missing a name or a value are skipped. Values are trimmed.
    pub fn collect(&self) -> Vec<Requirement> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let requirement_type = entry.requirement_type.trim();
                if requirement_type.is_empty() {
                    return None;
                }
                let arguments = entry
                    .arguments
                    .iter()
                    .map(|a| Argument::new(a.name.trim(), a.value.trim()))
                    .filter(Argument::is_complete)
                    .collect();
                Some(Requirement {
                    requirement_type: requirement_type.to_string(),
                    arguments,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_drops_untyped_requirements_and_incomplete_arguments() {
        let mut builder = RequirementBuilder::new();

        let typed = builder.add_requirement();
        builder
            .set_requirement_type(typed, "REQUIREMENT_PLOT_HAS_FEATURE")
            .unwrap();
        let complete = builder.add_argument(typed).unwrap();
        builder
            .set_argument(typed, complete, "FeatureType", "FEATURE_FOREST")
            .unwrap();
        let half = builder.add_argument(typed).unwrap();
        builder.set_argument(typed, half, "Amount", "").unwrap();

        let untyped = builder.add_requirement();
        let arg = builder.add_argument(untyped).unwrap();
        builder.set_argument(untyped, arg, "Foo", "Bar").unwrap();

        let collected = builder.collect();
        assert_eq!(
            collected,
            vec![Requirement::new("REQUIREMENT_PLOT_HAS_FEATURE")
                .with_argument(Argument::new("FeatureType", "FEATURE_FOREST"))]
        );
    }

    #[test]
    fn collect_is_pure() {
        let mut builder = RequirementBuilder::new();
        let req = builder.add_requirement();
        builder.add_argument(req).unwrap();

        let before = builder.clone();
        let first = builder.collect();
        let second = builder.collect();
        assert_eq!(first, second);
        assert_eq!(builder, before);
        assert_eq!(builder.argument_handles(req).len(), 1);
    }

    #[test]
    fn round_trip_through_saved_requirements() {
        let saved = vec![
            Requirement::new("REQUIREMENT_UNIT_TAG_MATCHES")
                .with_argument(Argument::new("Tag", "UNIT_CLASS_MELEE")),
            Requirement::new("REQUIREMENT_PLAYER_IS_AT_WAR"),
        ];
        let builder = RequirementBuilder::from_requirements(&saved);
        assert_eq!(builder.len(), 2);
        assert_eq!(builder.collect(), saved);
    }

    #[test]
    fn removed_handles_are_never_reused() {
        let mut builder = RequirementBuilder::new();
        let a = builder.add_requirement();
        let b = builder.add_requirement();
        builder.remove_requirement(a).unwrap();
        let c = builder.add_requirement();

        assert_ne!(a, c);
        assert_eq!(builder.requirement_handles(), vec![b, c]);
        assert_eq!(
            builder.set_requirement_type(a, "X"),
            Err(ManagementError::UnknownHandle("requirement"))
        );
        assert_eq!(
            builder.remove_requirement(a),
            Err(ManagementError::UnknownHandle("requirement"))
        );
    }

    #[test]
    fn argument_removal_keeps_siblings() {
        let mut builder = RequirementBuilder::new();
        let req = builder.add_requirement();
        builder.set_requirement_type(req, "REQ").unwrap();
        let first = builder.add_argument(req).unwrap();
        let second = builder.add_argument(req).unwrap();
        builder.set_argument(req, first, "A", "1").unwrap();
        builder.set_argument(req, second, "B", "2").unwrap();

        builder.remove_argument(req, first).unwrap();

        assert_eq!(builder.argument_handles(req), vec![second]);
        assert_eq!(builder.collect()[0].arguments, vec![Argument::new("B", "2")]);
        assert_eq!(
            builder.set_argument(req, first, "A", "1"),
            Err(ManagementError::UnknownHandle("argument"))
        );
    }

    #[test]
    fn removing_requirement_drops_its_arguments() {
        let mut builder = RequirementBuilder::new();
        let req = builder.add_requirement();
        let arg = builder.add_argument(req).unwrap();
        builder.remove_requirement(req).unwrap();

        assert!(builder.is_empty());
        assert!(builder.argument_handles(req).is_empty());
        assert!(builder.remove_argument(req, arg).is_err());
    }
}
