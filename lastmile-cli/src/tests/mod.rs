//! Shared test harness modules for the lastmile CLI.

use super::*;

mod helpers;
