// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::EnumIter;

/// Categorizes a parsed number based on its primary use.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// **Fixed-line numbers.**
    /// Geographic numbers tied to an area code, dialed without any mobile
    /// indicator.
    Landline,
    /// **Mobile numbers.**
    /// Geographic numbers carrying a mobile indicator: the international
    /// style marker dialed after the country code, or the national "15"
    /// style prefix dialed after the area code.
    Mobile,
    /// **Special service codes.**
    /// Short, fixed-length emergency and service numbers (e.g. 911, 100)
    /// with no subscriber segmentation.
    Special,
    /// **Specific service numbers.**
    /// Non-geographic dialing prefixes (e.g. toll-free 0800 style) with
    /// their own subscriber-length rules.
    Specific,
    /// **Unclassified.**
    /// The decomposition did not fit any of the categories above.
    None,
}
