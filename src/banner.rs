//! # Banner Module
//!
//! The copyright banner prepended to every file, and the marker phrase used to
//! recognise files that already carry it.
//!
//! The banner starts and ends with a newline. Together with the newline placed
//! on either side of it at insertion time, this leaves a blank line between the
//! banner and the surrounding content.

/// Phrase that identifies a file as already bannered.
pub const MARKER: &str = "This file is part of a Lnear project.";

/// The copyright banner, inserted verbatim.
pub const BANNER: &str = r#"
/**
 * This file is part of a Lnear project.
 *
 * (c) 2024 Lanre Ajao(lnear)
 *
 * For the full copyright and license information, please view the LICENSE
 * file that was distributed with this source code.
 * .........<-..(`-')_..(`-').._(`-').._....(`-').
 * ...<-.......\(.OO).).(.OO).-/(OO.).-/.<-.(OO.).
 * .,--..)..,--./.,--/.(,------./.,---...,------,)
 * .|..(`-')|...\.|..|..|...---'|.\./`.\.|.../`..'
 * .|..|OO.)|....'|..|)(|..'--..'-'|_.'.||..|_.'.|
 * (|..'__.||..|\....|..|...--'(|...-...||.......'
 * .|.....|'|..|.\...|..|..`---.|..|.|..||..|\..\.
 * .`-----'.`--'..`--'..`------'`--'.`--'`--'.'--'
 */
"#;

/// File name suffix that selects PHP handling (case-sensitive).
pub const PHP_SUFFIX: &str = ".php";

/// Opening tag after which the banner goes in PHP files.
pub const PHP_OPEN_TAG: &str = "<?php";
