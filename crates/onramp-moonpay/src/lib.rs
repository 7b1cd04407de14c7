//! # onramp-moonpay
//!
//! MoonPay embedded-widget integration: builds the configuration object the
//! widget SDK expects and hands it to an injected display capability. The
//! capability (an SDK binding, a webview bridge) is a black box here — this
//! crate only passes the configuration in and maps failure out.

pub mod config;
pub mod widget;

pub use config::MoonPayConfig;
pub use widget::{
    build_widget_config, launch, BoxError, MoonPay, WidgetConfig, WidgetHost, WidgetParams,
};
