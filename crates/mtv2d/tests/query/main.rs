mod polychain_shape;
mod polygon_polygon;
mod segment_shape;
mod symmetry;
