mod csc;
