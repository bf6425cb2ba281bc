mod encode_bad;
