//! Introspected plugin metadata.

/// Metadata reported by the plugin introspector.
///
/// Built once at startup from the introspector's textual report and
/// immutable afterwards. Port counts only cover audio ports; control
/// ports appear as entries in [`parameter_names`](Self::parameter_names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Display name. Empty if introspection did not find one.
    pub name: String,
    /// Symbolic label used to select the processor.
    pub label: String,
    /// Number of audio input ports (at least 1).
    pub num_inputs: usize,
    /// Number of audio output ports (at least 1).
    pub num_outputs: usize,
    /// Control-port display names in declaration order.
    ///
    /// May be shorter than the list of supplied control values; extra
    /// values are passed through to the processor uninterpreted.
    pub parameter_names: Vec<String>,
}

impl PluginDescriptor {
    /// Name to show in banners and plot titles.
    ///
    /// Falls back to the label when the introspector reported no name.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.label
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, label: &str) -> PluginDescriptor {
        PluginDescriptor {
            name: name.to_string(),
            label: label.to_string(),
            num_inputs: 1,
            num_outputs: 1,
            parameter_names: vec![],
        }
    }

    #[test]
    fn display_name_prefers_name() {
        let d = descriptor("RIAA Phono Filter", "riaa");
        assert_eq!(d.display_name(), "RIAA Phono Filter");
    }

    #[test]
    fn display_name_falls_back_to_label() {
        let d = descriptor("", "riaa");
        assert_eq!(d.display_name(), "riaa");
    }
}
