/// Render a price with a fixed number of decimals
pub fn format_price(price: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, price)
}

/// Render a size compactly: millions as `M`, thousands as `K`, smaller
/// sizes with four decimals
pub fn format_size(size: f64) -> String {
    if size >= 1_000_000.0 {
        format!("{:.2}M", size / 1_000_000.0)
    } else if size >= 1_000.0 {
        format!("{:.2}K", size / 1_000.0)
    } else {
        format!("{:.4}", size)
    }
}
