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

/// Splits `digits` into space-able groups following `grouping` and joins them
/// with `separator`. Digits left over once the schema is exhausted are kept
/// as one trailing group, so incomplete input never loses characters.
pub fn group_digits(digits: &str, grouping: &[usize], separator: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }
    let mut groups = Vec::with_capacity(grouping.len() + 1);
    let mut index = 0;
    for size in grouping {
        if index >= digits.len() {
            break;
        }
        let end = (index + size).min(digits.len());
        groups.push(&digits[index..end]);
        index = end;
    }
    if index < digits.len() {
        groups.push(&digits[index..]);
    }
    groups.join(separator)
}

#[cfg(test)]
mod tests {
    use super::group_digits;

    #[test]
    fn test_usage() {
        assert_eq!(group_digits("5512345678", &[3, 3, 4], " "), "551 234 5678");
        assert_eq!(group_digits("551234567890", &[3, 3, 4], " "), "551 234 5678 90");
        assert_eq!(group_digits("55123", &[3, 3, 4], " "), "551 23");
        assert_eq!(group_digits("", &[3, 3, 4], " "), "");
    }
}
