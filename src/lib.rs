//! Radgate - Radiation monitoring gateway
//!
//! This library provides the core functionality for ingesting Geiger counter
//! readings over HTTP, deriving calibrated dose-rate metrics, and serving
//! historical time-series windows for charting.

pub mod api;
pub mod cli;
pub mod config;
pub mod dose;
pub mod history;
pub mod logging;
pub mod reading;
pub mod storage;
