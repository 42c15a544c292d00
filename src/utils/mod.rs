mod fps_limit;

pub use fps_limit::FpsLimiter;
