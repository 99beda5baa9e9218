
mod health;
mod pets;
