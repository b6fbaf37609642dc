#[cfg(test)]
mod comparison;
