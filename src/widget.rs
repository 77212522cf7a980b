pub mod sparkline;

pub use sparkline::Sparkline;
