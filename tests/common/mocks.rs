//! Mock implementations for test fixtures.
//!
//! Re-exports the mock collaborators from `optswitch::adapters::mock` and
//! provides canonical fixtures shared across the integration suites.

#![allow(dead_code)]

pub use optswitch::adapters::mock::{MockHost, MockTag, RecordedEntry, RecordingMenu};

use optswitch::tool::{OptionSwitcher, ToolEvents};

/// Host with the three-way fireplace group from the documentation
/// example, exactly one option visible, plus an unrelated structural tag.
pub fn fireplace_host() -> MockHost {
    let tags = vec![
        MockTag::new("Walls"),
        MockTag::new("Option Fireplace: Scandi"),
        MockTag::hidden("Option Fireplace: Farmhouse"),
        MockTag::hidden("Option Fireplace: Victorian"),
    ];
    MockHost::new(tags)
}

/// Put `name`'s tag under the pointer and deliver a pointer event.
pub fn hover(tool: &mut OptionSwitcher<MockHost>, host: &mut MockHost, name: &str) {
    host.pick_result = Some(host.tag(name));
    tool.pointer_moved(host, 0.0, 0.0);
}

/// Deliver a pointer event over empty space.
pub fn hover_nothing(tool: &mut OptionSwitcher<MockHost>, host: &mut MockHost) {
    host.pick_result = None;
    tool.pointer_moved(host, 0.0, 0.0);
}

/// Names of the currently visible tags, in host order.
pub fn visible_tags(host: &MockHost) -> Vec<String> {
    use optswitch::traits::Tag;
    host.tags
        .iter()
        .filter(|t| t.is_visible())
        .map(|t| t.name())
        .collect()
}
