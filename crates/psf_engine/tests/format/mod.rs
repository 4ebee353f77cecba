mod psf2;
