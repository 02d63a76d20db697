use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// default limit on dense materialization, i.e. a 4096 x 4096 table
pub const DEFAULT_MAX_DENSE_CELLS: usize = 4096 * 4096;

/// Options controlling conversion of a [`SparseMatrix`](crate::table::SparseMatrix).
///
/// Construct with [`ConversionSettingsBuilder`], which supplies a default
/// for every field:
///
/// ```
/// use biomsparse::table::ConversionSettingsBuilder;
///
/// let settings = ConversionSettingsBuilder::default()
///     .max_dense_cells(100)
///     .drop_zeros(true)
///     .build()
///     .unwrap();
///
/// assert!(!settings.verbose);
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionSettings {
    ///refuse dense materialization above this many cells
    #[builder(default = "DEFAULT_MAX_DENSE_CELLS")]
    pub max_dense_cells: usize,

    ///omit entries whose duplicates sum to exactly zero from compressed views
    #[builder(default = "false")]
    pub drop_zeros: bool,

    ///print conversion statistics each time a view is computed
    #[builder(default = "false")]
    pub verbose: bool,
}

impl Default for ConversionSettings {
    fn default() -> ConversionSettings {
        ConversionSettingsBuilder::default().build().unwrap()
    }
}

impl ConversionSettings {
    /// true if switching from `prev` to these settings changes the
    /// content of compressed views
    pub(crate) fn changes_views(&self, prev: &Self) -> bool {
        self.drop_zeros != prev.drop_zeros
    }
}

#[test]
fn test_settings_defaults() {
    let settings = ConversionSettings::default();
    assert_eq!(settings.max_dense_cells, 16_777_216);
    assert!(!settings.drop_zeros);
    assert!(!settings.verbose);

    let built = ConversionSettingsBuilder::default().verbose(true).build().unwrap();
    assert!(built.verbose);
    assert_eq!(built.max_dense_cells, DEFAULT_MAX_DENSE_CELLS);
    assert!(!built.changes_views(&settings));

    let built = ConversionSettingsBuilder::default().drop_zeros(true).build().unwrap();
    assert!(built.changes_views(&settings));
}
