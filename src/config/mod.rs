// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Configuration module
///
/// Handles application settings for the crawler and the target marketplace
pub mod settings;
