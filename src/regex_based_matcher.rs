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

use log::error;

use crate::{
    interfaces::ClassMatcherApi,
    regex_util::RegexConsume,
    regexp_cache::{InvalidRegexError, RegexCache},
};

pub(crate) struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self {
            cache: RegexCache::with_capacity(64),
        }
    }

    fn match_prefix(&self, digits: &str, pattern: &str) -> Result<bool, InvalidRegexError> {
        let regex = self.cache.get_regex(pattern)?;
        // The match must start at the first digit; anything later in the
        // string is not a prefix of the number.
        Ok(regex.matches_start(digits))
    }
}

impl ClassMatcherApi for RegexBasedMatcher {
    fn matches_class(&self, digits: &str, patterns: &[&str]) -> bool {
        patterns.iter().any(|pattern| {
            match self.match_prefix(digits, pattern) {
                Ok(result) => result,
                Err(err) => {
                    error!("Invalid class pattern {pattern:?}: {err}");
                    false
                }
            }
        })
    }
}
