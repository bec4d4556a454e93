#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod login_phase_tests;

#[cfg(test)]
mod directory_tests;

#[cfg(test)]
mod dashboard_tests;

#[cfg(test)]
mod support_tests;

#[cfg(test)]
mod chart_tests;

#[cfg(test)]
mod render_tests;
