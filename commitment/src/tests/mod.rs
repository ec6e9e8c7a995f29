mod poseidon;
mod scalar;
mod token;
