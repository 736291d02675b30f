// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Utility module
///
/// Shared helpers that do not belong to a single layer.
pub mod telemetry;
