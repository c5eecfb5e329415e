mod polychain;
mod transforms;
