/// Two-column help layout: option key column and description column.
use tracing::debug;

/// Columns reserved for indentation and the gap between the two columns.
pub const TAB_INDENT: usize = 8;

/// Usable width up to which both columns scale proportionally.
pub const NARROW_USABLE_LIMIT: usize = 72;

/// Key column width on terminals wider than the proportional range.
pub const WIDE_KEY_WIDTH: usize = 18;

/// Widths of the key and description columns in rendered help.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnWidths {
    /// Width of the option-name column.
    pub key: usize,
    /// Width of the description column.
    pub description: usize,
}

impl ColumnWidths {
    /// Split a terminal of `width` columns.
    ///
    /// At the classic 80 columns this gives 18/54. Narrower terminals keep the
    /// 1:3 ratio; wider ones keep an 18-column key and give the rest to the
    /// description.
    #[must_use]
    pub fn for_terminal(width: usize) -> Self {
        let usable = width.saturating_sub(TAB_INDENT);
        let widths = if usable <= NARROW_USABLE_LIMIT {
            Self {
                key: usable / 4,
                description: usable * 3 / 4,
            }
        } else {
            Self {
                key: WIDE_KEY_WIDTH,
                description: usable - WIDE_KEY_WIDTH,
            }
        };
        debug!(width, key = widths.key, description = widths.description, "column widths");
        widths
    }
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self::for_terminal(crate::term::DEFAULT_WIDTH)
    }
}
