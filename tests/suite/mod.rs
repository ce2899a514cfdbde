mod cart_flow;
mod catalog_files;
mod instructions;
