//! Analysis heuristics the C++ backend tunes before grammar analysis.
//!
//! The generic analysis defaults are sized for targets where large switch
//! statements hurt (Java caps method sizes, for one). C++ compilers handle
//! enormous switches well and optimize them aggressively — favoring
//! switches over tables cuts object size by roughly a third and wins about
//! 20% at runtime — so the C++ backend raises three thresholds before
//! analysis runs.
//!
//! The thresholds are an explicit struct threaded through the analysis
//! call, and the backend only raises a threshold still holding its default:
//! a value the user set (`-Xmaxswitchcaselabels` and friends) is never
//! touched. The merge is idempotent, but it must run before analysis reads
//! the values — running it once per generation pass is the caller's
//! responsibility, not something the default-check substitutes for.

/// Default maximum acyclic-DFA states generated inline.
pub const MAX_INLINE_DFA_STATES_DEFAULT: u32 = 60;
/// Default maximum case labels before a switch becomes a table.
pub const MAX_SWITCH_CASE_LABELS_DEFAULT: u32 = 300;
/// Default minimum alternatives before a switch is preferred over ifs.
pub const MIN_SWITCH_ALTS_DEFAULT: u32 = 3;

/// Thresholds the grammar-analysis stage consults when choosing between
/// inline DFAs, switch statements, and transition tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisThresholds {
    /// Acyclic DFAs with at most this many states are generated inline.
    pub max_inline_dfa_states: u32,
    /// Decisions with more case labels than this use a table, not a switch.
    pub max_switch_case_labels: u32,
    /// Decisions need at least this many alternatives to use a switch.
    pub min_switch_alts: u32,
}

impl Default for AnalysisThresholds {
    fn default() -> Self {
        AnalysisThresholds {
            max_inline_dfa_states: MAX_INLINE_DFA_STATES_DEFAULT,
            max_switch_case_labels: MAX_SWITCH_CASE_LABELS_DEFAULT,
            min_switch_alts: MIN_SWITCH_ALTS_DEFAULT,
        }
    }
}

impl AnalysisThresholds {
    /// The values the C++ backend prefers: inline DFAs up to the 16-bit
    /// state-number limit, switches up to 3000 labels, and a switch for
    /// any number of alternatives.
    pub fn cxx_preferred() -> Self {
        AnalysisThresholds {
            max_inline_dfa_states: 65535,
            max_switch_case_labels: 3000,
            min_switch_alts: 1,
        }
    }

    /// Raise each threshold still holding its default to the backend's
    /// preferred value. Thresholds the caller already customized are left
    /// untouched. Safe to call repeatedly.
    pub fn merge_preferred(&mut self, preferred: &AnalysisThresholds) {
        merge_field(
            &mut self.max_inline_dfa_states,
            MAX_INLINE_DFA_STATES_DEFAULT,
            preferred.max_inline_dfa_states,
            "max_inline_dfa_states",
        );
        merge_field(
            &mut self.max_switch_case_labels,
            MAX_SWITCH_CASE_LABELS_DEFAULT,
            preferred.max_switch_case_labels,
            "max_switch_case_labels",
        );
        merge_field(
            &mut self.min_switch_alts,
            MIN_SWITCH_ALTS_DEFAULT,
            preferred.min_switch_alts,
            "min_switch_alts",
        );
    }
}

fn merge_field(current: &mut u32, default: u32, preferred: u32, name: &str) {
    if *current == default && *current != preferred {
        log::debug!("raising {} from default {} to {}", name, default, preferred);
        *current = preferred;
    }
}
