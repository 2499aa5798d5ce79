/// Concatenates fragments in order. Multi-byte and symbolic input passes
/// through unchanged.
pub fn concat_fragments(parts: &[&str]) -> String {
    let mut out = String::with_capacity(parts.iter().map(|p| p.len()).sum());
    for part in parts {
        out.push_str(part);
    }
    out
}

/// Mixed-script sample line used by the export fallback data.
pub fn mixed_script_sample() -> String {
    concat_fragments(&["測試", "テスト", "!@#$%^&*()_+-=[]{}|;':\",./<>?"])
}
