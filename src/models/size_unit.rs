use serde::Serialize;

/// A binary size unit and its size in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeUnit {
    pub label: &'static str,
    pub size: i64,
}

/// Size units ordered from the largest to the smallest.
pub const SIZE_UNITS: [SizeUnit; 6] = [
    SizeUnit { label: "PB", size: 1 << 50 },
    SizeUnit { label: "TB", size: 1 << 40 },
    SizeUnit { label: "GB", size: 1 << 30 },
    SizeUnit { label: "MB", size: 1 << 20 },
    SizeUnit { label: "KB", size: 1 << 10 },
    SizeUnit { label: "B", size: 1 },
];

/// Byte window accepted around a wanted file size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ToleranceResults {
    pub tolerance_size: i64,
    pub upper_bound_size: i64,
    pub lower_bound_size: i64,
}
