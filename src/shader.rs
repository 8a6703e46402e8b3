pub const BLIT_SOURCE: &str = include_str!("blit.wgsl");
