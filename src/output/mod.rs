pub mod formatter;

pub use formatter::{
    format_catalog, format_effect_badge, format_json, format_record, format_report, format_stars,
    format_tsv, should_use_colors, skin_type_note,
};
