pub mod formatter;

pub use formatter::{
    format_entry_detail, format_leaderboard_table, format_summary, format_warning,
    should_use_colors,
};
