#[cfg(test)]
mod derivation;
