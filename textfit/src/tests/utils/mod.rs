// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod box_face;
mod env;

pub(crate) use box_face::BoxFace;
pub(crate) use env::{TestEnv, line_text};
