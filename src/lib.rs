// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Application module
///
/// Contains the use cases that wire the crawler together
pub mod application;

/// Configuration module
///
/// Handles application settings and environment variables
pub mod config;

/// Crawler module
///
/// Browser session management, field extraction and the page crawl loop
pub mod crawler;

/// Domain module
///
/// Core business entities and the title normalization engine
pub mod domain;

/// Sink module
///
/// Persistence collaborator contract and the in-memory reference sink
pub mod sink;

/// Utility module
///
/// Shared helpers such as telemetry initialization
pub mod utils;
