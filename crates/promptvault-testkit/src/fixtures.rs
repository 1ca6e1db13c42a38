//! Prompt document fixtures

/// The six COSTAR headings and nothing else
pub const HEADINGS_ONLY: &str = "\
### Context
### Objective
### Style
### Tone
### Audience
### Response
";

/// A filled-in document with three test cases and evaluation results
pub const COMPLETE_DOCUMENT: &str = "\
# Code Reviewer v1.1.0

## Purpose
Review pull requests for correctness.

## COSTAR Analysis

### Context
Rust services maintained by a small team.

### Objective
Point out bugs before merge.

### Style
Bullet list per file.

### Tone
Direct, never rude.

### Audience
Senior engineers.

### Response
Markdown with code suggestions.

## The Prompt
```
Review the following diff.
```

## Test Cases

### Test Case 1: Off-by-one
**Result:** ✅ Pass

### Test Case 2: Unchecked unwrap
**Result:** ✅ Pass

### Test Case 3: Style only
**Result:** ❌ Fail

## Evaluation Results

- **Accuracy:** 92%
";

/// All headings except Tone and Audience
pub const MISSING_TONE_AND_AUDIENCE: &str = "\
### Context
### Objective
### Style
### Response
";
