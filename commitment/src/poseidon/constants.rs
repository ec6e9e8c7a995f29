//! Round constants and MDS matrices of the circom-compatible Poseidon instances over the
//! BN254 scalar field, stored as little-endian `u64` limbs in canonical (non-Montgomery) form.
//!
//! The tables are the output of the Grain LFSR parameter generation for `(field = 1, sbox = 0,
//! n = 254)` with `(t = 3, R_F = 8, R_P = 57)` and `(t = 4, R_F = 8, R_P = 56)`. They must not be
//! edited: on-chain verifiers hash with exactly these values.

pub(crate) type Limbs = [u64; 4];

pub(crate) const T3_ROUND_CONSTANTS: [Limbs; 195] = [
    [0x8d21d47304cd8e6e, 0x14c4993c11bb2993, 0xd05986d656f40c21, 0x0ee9a592ba9a9518],
    [0x5696fff40956e864, 0x887b08d4d00868df, 0x5986587169fc1bcd, 0x00f1445235f2148c],
    [0xe879f3890ecf73f5, 0x30c728730b7ab36c, 0x1f29a058d0fa80b9, 0x08dff3487e8ac99e],
    [0x20966310fadc01d0, 0x56c35342c84bda6e, 0xc3ce28f7532b13c8, 0x2f27be690fdaee46],
    [0x8b8327bebca16cf2, 0xb763fe04b8043ee4, 0x2416bebf3d4f6234, 0x2b2ae1acf68b7b8d],
    [0xe64b44c7dbf11cfa, 0x5952c175ab6b03ea, 0xcca5eac06f97d4d5, 0x0319d062072bef7e],
    [0x8ef7b387bf28526d, 0xc8b7bf27ad49c629, 0x8a376df87af4a63b, 0x28813dcaebaeaa82],
    [0x150928adddf9cb78, 0x2033865200c352bc, 0xf181bf38e1c1d40d, 0x2727673b2ccbc903],
    [0xb8fb9e31e65cc632, 0x6efbd43e340587d6, 0xe74abd2b2a1494cd, 0x234ec45ca27727c2],
    [0xcd99ff6e8797d428, 0xab10a8150a337b1c, 0x7f862cb2cf7cf760, 0x15b52534031ae18f],
    [0xd701d4eecf68d1f6, 0x8e0e8a8d1b58b132, 0x5ed9a3d186b79ce3, 0x0dc8fad6d9e4b35f],
    [0x97805518a47e4d9c, 0xea4eb378f62e1fec, 0x600f705fad3fb567, 0x1bcd95ffc211fbca],
    [0x17cb978d069de559, 0xc76da36c25789378, 0xe9eff81b016fc34d, 0x10520b0ab721cadf],
    [0xe88a9eb81f5627f6, 0x2932498075fed0ac, 0x9b257d8ed5fbbaf4, 0x1f6d48149b8e7f7d],
    [0xca34bdb5460c8705, 0xfff8dc1c816f0dc9, 0xd29e00ef35a2089b, 0x1d9655f652309014],
    [0x8fe3d4185697cc7d, 0xa731ff67e4703205, 0xb051f7b1cd43a99b, 0x04df5a56ff95bcaf],
    [0xf6ec282b6e4be828, 0x8690a10a8c8424a7, 0x151b3d290cedaf14, 0x0672d995f8fff640],
    [0x9fc1d8209b5c75b9, 0x0c9a9dcc06f2708e, 0xb21200d7ffafdd5f, 0x099952b414884454],
    [0x83fd0e843a6b9fa6, 0x48e43586a9b4cd91, 0x7c483143ba8d4694, 0x052cba2255dfd00c],
    [0x16077cb93c464ddc, 0x82de55707251ad77, 0xb0bd74712b7999af, 0x0b8badee690adb8e],
    [0xb963d0a8e4b2bdd1, 0x49c15d60683a8050, 0x5a1ee651020c07c7, 0x119b1590f13307af],
    [0xce15be0bfb4a8d09, 0x2c4acfc884ef4ee5, 0x2529d36be0f67b83, 0x03150b7cd6d5d17b],
    [0xbe69cb317c9ea565, 0x5374efb83d80898a, 0x3cf1951f17391235, 0x2cc6182c5e14546e],
    [0x92d2cd73111bf0f9, 0x4218cadedac14e2b, 0x50cfe129a404b376, 0x005032551e6378c4],
    [0x88f9da2cc28276b5, 0x6469c399fcc069fb, 0xbb147e972ebcb951, 0x233237e3289baa34],
    [0xe80c2d4c24d60280, 0x23037f21b34ae5a4, 0xc980d31674bfbe63, 0x05c8f4f4ebd4a6e3],
    [0xee1f09b2590fc65b, 0x52bcf35ef3aeed91, 0xba05d818a319f252, 0x0a7b1db13042d396],
    [0x5df542365a404ec0, 0xf156e2b086ff47dc, 0xb14296572c9d32db, 0x2a73b71f9b210cf5],
    [0x76a760bb5c50c460, 0xec18f2c4dbe7f229, 0x935107e9ffc91dc3, 0x1ac9b0417abcc9a1],
    [0x9015ee046dc93fc0, 0x269f3e4d6cb10434, 0x3fabb076707ef479, 0x12c0339ae0837482],
    [0x8246682e56e9a28e, 0x52900aa3253baac6, 0x7f5b18db4e1e704f, 0x0b7475b102a165ad],
    [0x32ab3aa88d7f8448, 0x7c843e379366f2ea, 0xdb1c5e49f6e8b891, 0x037c2849e191ca3e],
    [0x45fdb176a716346f, 0xd5206c5c93a07dc1, 0xe92674661e217e9b, 0x05a6811f8556f014],
    [0x7b675ef5f38bd66e, 0x4076e87a7b2883b4, 0x6e947b75d54e9f04, 0x29a795e7d9802894],
    [0x507be199981fd22f, 0x6e8c7382c8a1585c, 0x45a3857afc18f582, 0x20439a0c84b322eb],
    [0x4a2a6f2a0982c887, 0xbb50f27799a84b6d, 0x94ec2050c7371ff1, 0x2e0ba8d94d9ecf4a],
    [0xe6d0ddcca17d71c8, 0x17822cd2109048d2, 0xca38eb7cce822b45, 0x143fd115ce08fb27],
    [0xc84323623be9caf1, 0xf8611659323dbcbf, 0x57968dbbdcf813cd, 0x0c64cbecb1c734b8],
    [0xf1426cef9403da53, 0xe74f348d62c2b670, 0x46fca925c163ff5a, 0x028a305847c683f6],
    [0x24d6755b5db9e30c, 0x6a6bcb64d89427b8, 0x5fa940ab4c4380f2, 0x2e4ef510ff0b6fda],
    [0xb96384f50579400e, 0x8925b4f6d033b078, 0x63d79270c956ce3b, 0x0081c95bc43384e6],
    [0xba8a9f4023a0bb38, 0xe2491b349c039a0b, 0x187e2fade687e05e, 0x2ed5f0c91cbd9749],
    [0x990f01f33a735206, 0x3448a22c76234c8c, 0x4bbf374ed5aae2f0, 0x30509991f88da350],
    [0xa7529094424ec6ad, 0xf0a1119fb2067b41, 0x221b7c4d49a356b9, 0x1c3f20fd55409a53],
    [0x170887b47ddcb96c, 0xc46bb2213e8e131e, 0x049514459b6e18ee, 0x10b4e7f3ab5df003],
    [0x039aa3502e43adef, 0xdd80f804c077d775, 0x3ddd543d891c2abd, 0x2a1982979c3ff7f4],
    [0x5cad0f1315bd5c91, 0xba431ebc396c9af9, 0xfeddbead56d6d55d, 0x1c74ee64f15e1db6],
    [0x9c2fe45a0ae146a0, 0x9e4f2e8b82708cfa, 0xeab9303cace01b4b, 0x07533ec850ba7f98],
    [0x8a11abf3764c0750, 0x285c68f42d42c180, 0xa151e4eeaf17b154, 0x21576b438e500449],
    [0x743d6930836d4a9e, 0xbce8384c815f0906, 0x08ad5ca193d62f10, 0x2f17c0559b8fe796],
    [0xe665b0b1b7e2730e, 0x9775a4201318474a, 0xa79e8aae946170bc, 0x2d477e3862d07708],
    [0xd89be0f5b2747eab, 0xafba2266c38f5abc, 0x90e095577984f291, 0x162f5243967064c3],
    [0x7777a70092393311, 0xd7a8596a87f29f8a, 0x264ecd2c8ae50d1a, 0x2b4cb233ede9ba48],
    [0x4254e7c35e03b07a, 0x6db2eece6d85c4cf, 0x1dbaf8f462285477, 0x2c8fbcb2dd8573dc],
    [0xe5e88db870949da9, 0x9e1b61e9f601e9ad, 0xf2ff453f0cd56b19, 0x1d6f347725e4816a],
    [0x4cd49af5c4565529, 0xf9e6ac02b68d3132, 0xebc2d8b3df5b913d, 0x204b0c397f4ebe71],
    [0x4ff8fb75bc79c502, 0x9ecb827cd7dc2553, 0x4f1149b3c63c3c2f, 0x0c4cb9dc3c4fd817],
    [0x9a616ddc45bc7b54, 0x1e5c49475279e063, 0xa25416474f493030, 0x174ad61a1448c899],
    [0x3a9816d49a38d2ef, 0xeaaa28c177cc0fa1, 0xf759df4ec2f3cde2, 0x1a96177bcf4d8d89],
    [0x8242ace360b8a30a, 0x05202c126a233c1a, 0xd0ef8054bc60c4ff, 0x066d04b24331d71c],
    [0x27037a62aa1bd804, 0x381cc65f72e02ad5, 0x2195782871c6dd3b, 0x2a4c4fc6ec0b0cf5],
    [0xe55afc01219fd649, 0x5e727f8446f6d9d7, 0x47e9f2e14a7cedc9, 0x13ab2d136ccf37d4],
    [0x4c2e3e869acc6a9a, 0xc1b04fcec26f5519, 0x19d24d843dc82769, 0x1121552fca260616],
    [0x09a5546c7c97cff1, 0xa6cd267d595c4a89, 0x889bc81715c37d77, 0x00ef653322b13d6c],
    [0x845aca35d8a397d3, 0x400c776d652595d9, 0x8b261d8ba74051e6, 0x0e25483e45a66520],
    [0x46448db979eeba89, 0x395ac3d4dde92d8c, 0x245264659e15d88e, 0x29f536dcb9dd7682],
    [0x0e456baace0fa5be, 0x5a124e2780bbea17, 0xdfda33575dbdbd88, 0x2a56ef9f2c53feba],
    [0xee416240a8cb9af1, 0xf2ae2999a46762e8, 0xecfb7a2d17b5c409, 0x1c8361c78eb5cf5d],
    [0xd3d0ab4be74319c5, 0x83e8e68a764507bf, 0xc0473089aaf0206b, 0x151aff5f38b20a0f],
    [0xe76e47615b51f100, 0xa9f52fc8c8b6cdd1, 0xc1b239c88f7f9d43, 0x04c6187e41ed881d],
    [0x9e801b7ddc9c2967, 0x4b81c61ed1577644, 0x10d84331f6fb6d53, 0x13b37bd80f4d27fb],
    [0x9321ceb1c4e8a8e4, 0x2ce3664c2a52032c, 0xf578bfbd32c17b7a, 0x01a5c536273c2d9d],
    [0x832239065b7c3b02, 0x4a9a2c666b9726da, 0x5ad05f5d7acb950b, 0x2ab3561834ca7383],
    [0x9f7ed516a597b646, 0xacaf6af4e95d3bf6, 0x200fe6d686c0d613, 0x1d4d8ec291e720db],
    [0x1514c9c80b65af1d, 0xb925351240a04b71, 0x8f5784fe7919fd2b, 0x041294d2cc484d22],
    [0x042971dd90e81fc6, 0x98f57939d126e392, 0x1c4fa715991f0048, 0x154ac98e01708c61],
    [0x4524563bc6ea4da4, 0x50b3684c88f8b0b0, 0x3eedd84093aef510, 0x0b339d8acca7d4f8],
    [0x81ed95b50839c82e, 0x98f0e71eaff4a7dd, 0x54a4f84cfbab3445, 0x0955e49e6610c942],
    [0x3525401ea0654626, 0xa9a6f41e6f535c6f, 0x26b9e22206f15abc, 0x06746a6156eba544],
    [0xac917c7ff32077fb, 0x38e5790e2bd0a196, 0x496f3820c549c278, 0x0f18f5a0ecd1423c],
    [0x2a738223d6f76e13, 0x4bb563583ede7bc9, 0x8ac59eff5beb261e, 0x04f6eeca1751f730],
    [0xc1768d26fc0b3758, 0x8811eb116fb3e45b, 0xc1a3ec4da3cdce03, 0x2b56973364c4c4f5],
    [0x83feb65d437f29ef, 0x8e1392b385716a5d, 0xdcd76b89804b1bcb, 0x123769dd49d5b054],
    [0x94257b2fb01c63e9, 0xa989f64464711509, 0x88ee52b91169aace, 0x2147b424fc48c80a],
    [0xea54ad897cebe54d, 0x647e6f34ad4243c2, 0x1a6c5505ea332a29, 0x0fdc1f58548b8570],
    [0x944f685cc0a0b1f2, 0xbceff28c5dbbe0c3, 0xdf68abcf0f7786d4, 0x12373a8251fea004],
    [0xdd8a1f35c1a90035, 0xa642756b6af44203, 0xad7ea52ff742c9e8, 0x21e4f4ea5f35f85b],
    [0x8a81934f1bc3b147, 0xb57366492f45e90d, 0xdfb4722224d4c462, 0x16243916d69d2ca3],
    [0xa13a4159cac04ac2, 0xabc21566e1a0453c, 0xf66f9adbc88b4378, 0x1efbe46dd7a578b4],
    [0x3b672cc96a88969a, 0xd468d5525be66f85, 0x8886020e23a7f387, 0x07ea5e8537cf5dd0],
    [0xa9fe16c0b76c00bc, 0x650f19a75e7ce11c, 0xb7b478a30f9a5b63, 0x05a8c4f9968b8aa3],
    [0x2d9d57b72a32e83f, 0x3f7818c701b9c788, 0xfbfe59bd345e8dac, 0x20f057712cc21654],
    [0x9bd90b33eb33db69, 0x6dcd8e88d01d4901, 0x9672f8c67fee3163, 0x04a12ededa9dfd68],
    [0xe49ec9544ccd101a, 0xbd136ce5091a6767, 0xe44f1e5425a51dec, 0x27e88d8c15f37dce],
    [0x176c41ee433de4d1, 0x6e096619a7703223, 0xb8a5c8c5e95a41f6, 0x2feed17b84285ed9],
    [0x6972b8bd53aff2b8, 0x94e5942911312a0d, 0x404241420f729cf3, 0x1ed7cc76edf45c7c],
    [0xdf2874be45466b1a, 0xac6783476144cdca, 0x157ff8c586f5660e, 0x15742e99b9bfa323],
    [0x284f033f27d0c785, 0x77107454c6ec0317, 0xc895fc6887ddf405, 0x1aac285387f65e82],
    [0xec75a96554d67c77, 0x832e2e7a49775f71, 0xf9ddadbdb6057357, 0x25851c3c845d4790],
    [0x0ddccc3d9f146a67, 0x53b7ebba2c552337, 0xce78457db197edf3, 0x15a5821565cc2ec2],
    [0x2f15485f28c71727, 0xdcf64f3604427750, 0x0efa7e31a1db5966, 0x2411d57a4813b998],
    [0x58828b5ef6cb4c9b, 0x47e9a98e12f4cd25, 0x13e335b8c0b6d2e6, 0x002e6f8d6520cd47],
    [0x398834609e0315d2, 0xaf8f0e91e2fe1ed7, 0x97da00b616b0fcd1, 0x2ff7bc8f4380cde9],
    [0xe93be4febb0d3cbe, 0x2e9521f6b7bb68f1, 0x5ee02724471bcd18, 0x00b9831b94852559],
    [0x7d77adbf0c9c3512, 0x1ca408648a4743a8, 0x86913b0e57c04e01, 0x0a2f53768b8ebf6a],
    [0x7f2a290305e1198d, 0x0f599ff7e94be69b, 0x3a479f91ff239e96, 0x00248156142fd037],
    [0x50eb512a2b2bcda9, 0x397196aa6a542c23, 0x28cf8c02ab3f0c9a, 0x171d5620b87bfb13],
    [0x9d1045e4ec34a808, 0x60c952172dd54dd9, 0x70087c7c10d6fad7, 0x170a4f55536f7dc9],
    [0x482eca17e2dbfae1, 0xcc37e38c1cd211ba, 0x2ef3134aea04336e, 0x29aba33f799fe66c],
    [0xb5ba650369e64973, 0xe70d114a03f6a0e8, 0xfdd1bb1945088d47, 0x1e9bc179a4fdd758],
    [0x9c9e1c43bdaf8f09, 0xfeaad869a9c4b44f, 0x58f7f4892dfb0b5a, 0x1dd269799b660fad],
    [0x5d1dd2cb0f24af38, 0x7ccd426fe869c7c9, 0x401181d02e15459e, 0x22cdbc8b70117ad1],
    [0xd5ba93b9c7dacefd, 0xfd3150f52ed94a7c, 0x3a9f57a55c503fce, 0x0ef042e454771c53],
    [0x3b304ffca62e8284, 0x1318e8b08a0359a0, 0xf287f3036037e885, 0x11609e06ad6c8fe2],
    [0x08b08f5b783aa9af, 0xfecd58c076dfe427, 0x9e753eea427c17b7, 0x1166d9e554616dba],
    [0xf855a888357ee466, 0x177fbf4cd2ac0b56, 0x93413026354413db, 0x2de52989431a8595],
    [0x74bf01cf5f71e9ad, 0xf51aee5b17b8e89d, 0x9a6da492f3a8ac1d, 0x3006eb4ffc7a8581],
    [0x62344c8225145086, 0x2993fe8f0a4639f9, 0xfdcf6fff9e3f6f42, 0x2af41fbb61ba8a80],
    [0x81b214bace4827c3, 0x8718ab27889e85e7, 0xe5a6b41a8ebc85db, 0x119e684de476155f],
    [0xcff784b97b3fd800, 0xb51248c23828f047, 0x188bea59ae363537, 0x1835b786e2e8925e],
    [0x6c40e285ab32eeb6, 0xd152bac2a7905c92, 0x4d794996c6433a20, 0x28201a34c594dfa3],
    [0x4a761f88c22cc4e7, 0x864c82eb57118772, 0x94e80fefaf78b000, 0x083efd7a27d17510],
    [0x9e079564f61fd13b, 0x11c16df7774dd851, 0x6158e61ceea27be8, 0x0b6f88a357719952],
    [0x14390e6ee4254f5b, 0x589511ca00d29e10, 0x644f66e1d6471a94, 0x0ec868e6d15e51d9],
    [0x00d937ab84c98591, 0xecd3e74b939cd40d, 0x1ac0c9b3ed2e1142, 0x2af33e3f86677127],
    [0x364ce5e47951f178, 0x34568c547dd6858b, 0xd09b5d961c6ace77, 0x0b520211f904b5e7],
    [0xca228620188a1d40, 0xa0c56ac4270e822c, 0xd8db58f10062a92e, 0x0b2d722d0919a1aa],
    [0xe0061d1ed6e562d4, 0x57b54a9991ca38bb, 0xd980ceb37c2453e9, 0x1f790d4d7f8cf094],
    [0xda92ceb01e504233, 0x0885c16235a2a6a8, 0xaea97cd385f78015, 0x0171eb95dfbf7d1e],
    [0x762305381b168873, 0x790b40defd2c8650, 0x329bf6885da66b9b, 0x0c2d0e3b5fd57549],
    [0x5d3803054407a18d, 0x7cbcafa589e283c3, 0x4e5a8228b4e72b37, 0x1162fb28689c2715],
    [0x1623ef8249711bc0, 0x282c5a92a89e1992, 0x64ad386a91e8310f, 0x2f1459b65dee441b],
    [0xc243f70d1b53cfbb, 0xbc489d46754eb712, 0x996d74367d5cd4c1, 0x1e6ff3216b688c3d],
    [0x76881f9326478875, 0xd741a6f36cdc2a05, 0x681487d27d157802, 0x01ca8be73832b8d0],
    [0x0b9b5de315f9650e, 0x680286080b10cea0, 0x86f976d5bdf223dc, 0x1f7735706ffe9fc5],
    [0x4745ca838285f019, 0x21ac10a3d5f096ef, 0x40a0c2dce041fba9, 0x2522b60f4ea33076],
    [0x8ce16c235572575b, 0x3418cad4f52b6c3f, 0x5255075ddc957f83, 0x23f0bee001b1029d],
    [0x66d9401093082d59, 0x5d142633e9df905f, 0xcaac2d44555ed568, 0x2bc1ae8b8ddbb81f],
    [0x8011fcd6ad72205f, 0x62371273a07b1fc9, 0x7304507b8dba3ed1, 0x0f9406b8296564a3],
    [0xcb126c8cd995f0a8, 0x17e75b174a52ee4a, 0x67b72998de90714e, 0x2360a8eb0cc7defa],
    [0x6dcbbc2767f88948, 0xb4815a5e96df8b00, 0x804c803cbaef255e, 0x15871a5cddead976],
    [0x4f957ccdeefb420f, 0x362f4f54f7237954, 0x0a8652dd2f3b1da0, 0x193a56766998ee9e],
    [0xe4309805e777ae0f, 0x3b2e63c8ad334834, 0x2f9be56ff4fab170, 0x2a394a43934f8698],
    [0xb4166e8876c0d142, 0x892cd11223443ba7, 0x3e8b635dcb345192, 0x1859954cfeb8695f],
    [0x408d3819f4fed32b, 0x2b11bc25d90bbdca, 0x013444dbcb99f190, 0x04e1181763050e58],
    [0x1f5e5552bfd05f23, 0xb10eb82db08b5e8b, 0x40c335ea64de8c5b, 0x0fdb253dee83869d],
    [0xa9d7c5bae9b4f1c0, 0x75f08686f1c08984, 0xaa4efb623adead62, 0x058cbe8a9a5027bd],
    [0xd15228b4cceca59a, 0x23b4b83bef023ab0, 0x497eadb1aeb1f52b, 0x1382edce9971e186],
    [0xe1e6634601d9e8b5, 0x7f61b8eb99f14b77, 0x0819ca51fd11b0be, 0x03464990f045c6ee],
    [0xaa5bc137aeb70a58, 0x6fcab4605db2eb5a, 0xfff33b41f98ff83c, 0x23f7bfc8720dc296],
    [0x19636158bbaf62f2, 0x18c3ffd5e1531a92, 0x7e6e94e7f0e9decf, 0x0a59a158e3eec211],
    [0xf4c23ed0075fd07b, 0xe2c4eba065420af8, 0xb58bf23b312ffd3c, 0x06ec54c80381c052],
    [0x962f0ff9ed1f9d01, 0xb09340f7a7bcb1b4, 0x476b56648e867ec8, 0x118872dc832e0eb5],
    [0x95e1906b520921b1, 0x52e0b0f0e42d7fea, 0x5ad5c7cba7ad59ed, 0x13d69fa127d83416],
    [0xfd8a49f19f10c77b, 0xde143942fb71dc55, 0x70b1c6877a73d21b, 0x169a177f63ea6812],
    [0xfb7e9a5a7450544d, 0x3abeb032b922f66f, 0xef42f287adce40d9, 0x04ef51591c6ead97],
    [0xd5f45ee6dd0f69ec, 0x19ec61805d4f03ce, 0x0ecd7ca703fb2e3b, 0x256e175a1dc07939],
    [0xa002813d3e2ceeb2, 0x75cc360d3205dd2d, 0xe5f2af412ff6004f, 0x30102d28636abd5f],
    [0x1fd31be182fcc792, 0x0443a3fa99bef4a3, 0x1c0714bc73eb1bf4, 0x10998e42dfcd3bbf],
    [0xecad76f879e36860, 0x9f3362eaf4d582ef, 0x25fa7d24b598a1d8, 0x193edd8e9fcf3d76],
    [0xf2664d7aa51f0b5d, 0xd1c7a561ce611425, 0xd0368ce80b7b3347, 0x18168afd34f2d915],
    [0x29e2e95b33ea6111, 0xa328ec77bc33626e, 0x0c017656ebe658b6, 0x29383c01ebd3b6ab],
    [0x00bf573f9010c711, 0x702db6e86fb76ab6, 0xa1f4ae5e7771a64a, 0x10646d2f2603de39],
    [0x64d0242dcb1117fb, 0x2f90c25b40da7b38, 0xf575f1395a55bf13, 0x0beb5e07d1b27145],
    [0xdffbf018d96fa336, 0x30f95bb2e54b59ab, 0xdc0d3ecad62b5c88, 0x16d685252078c133],
    [0xfd672dd62047f01a, 0x0a555bbbec21ddfa, 0x3c74154e0404b4b4, 0x0a6abd1d833938f3],
    [0x70a6f19b34cf1860, 0xb12dffeec4503172, 0x8ea12a4c2dedc8fe, 0x1a679f5d36eb7b5c],
    [0xfbc7592e3f1b93d6, 0x26a423eada4e8f6f, 0x3974d50e0ebfde47, 0x0980fb233bd456c2],
    [0x03ebacb5c312c72b, 0xcece3d5628c92820, 0xbf1810af93a38fc0, 0x161b42232e61b84c],
    [0xd09203db47de1a0b, 0x493f09787f1564e5, 0x950f7d47a60d5e6a, 0x0ada10a90c7f0520],
    [0xb50ddb9af407f451, 0xd3f07a8a2b4e121b, 0x320345a29ac4238e, 0x1a730d372310ba82],
    [0xfbda10ef58e8c556, 0x908377feaba5c4df, 0x817064c369dda7ea, 0x2c8120f268ef054f],
    [0x6e7b8649a4968f70, 0xb930e95313bcb73e, 0xa57c00789c684217, 0x1c7c8824f758753f],
    [0xb47b27fa3fd1cf77, 0xf400ad8b491eb3f7, 0x8e39e4077a74faa0, 0x2cd9ed31f5f8691c],
    [0x854ae23918a22eea, 0xa5e022ac321ca550, 0xcf60d92f57618399, 0x23ff4f9d46813457],
    [0xdff1ea58f180426d, 0xaf5a2c5103529407, 0xceece6405dddd9d0, 0x09945a5d147a4f66],
    [0x8a6dd223ec6fc630, 0x7c7da6eaa29d3f26, 0xb67660c6b771b90f, 0x188d9c528025d4c2],
    [0xe0c0d8ddf4f0f47f, 0xdba7d926d3633595, 0x81f68311431d8734, 0x3050e37996596b7f],
    [0x9d829518d30afd78, 0x6ceae5461e3f95d8, 0x1600ca8102c35c42, 0x15af1169396830a9],
    [0x04284da3320d8acc, 0xdae933e351466b29, 0xa06d9f37f873d985, 0x1da6d09885432ea9],
    [0xe546ee411ddaa9cb, 0x4e4fad3dbe658945, 0xf5f8acf33921124e, 0x2796ea90d269af29],
    [0x7cb0319e01d32d60, 0x1e15612ec8e9304a, 0x0325c8b3307742f0, 0x202d7dd1da0f6b4b],
    [0xa29dace4c0f8be5f, 0xa2d7f9c788f4c831, 0x156a952ba263d672, 0x096d6790d05bb759],
    [0x63798cb1447d25a4, 0x438da23ce5b13e19, 0x83808965275d877b, 0x054efa1f65b0fce2],
    [0x64ccf6e18e4165f1, 0xd8aa690113b2e148, 0xdb3308c29802deb9, 0x1b162f83d917e93e],
    [0xc5ceb745a0506edc, 0xedfefc1466cc568e, 0xfd9f1cdd2a0de39e, 0x21e5241e12564dd6],
    [0x7b4349e10e4bdf08, 0xcb73ab5f87e16192, 0x226a80ee17b36abe, 0x1cfb5662e8cf5ac9],
    [0x29c53f666eb24100, 0x2c99af346220ac01, 0xbae6d8d1ecb373b6, 0x0f21177e302a771b],
    [0xbcef7e1f515c2320, 0xc4236aede6290546, 0xaffb0dd7f71b12be, 0x1671522374606992],
    [0xd419d2a692cad870, 0xbe2ec9e42c5cc8cc, 0x2eb4cf24501bfad9, 0x0fa3ec5b9488259c],
    [0x85e8c57b1ab54bba, 0xd36edce85c648cc0, 0x57cb266c1506080e, 0x193c0e04e0bd2983],
    [0xce14ea2adaba68f8, 0x9f6f7291cd406578, 0x7e9128306dcbc3c9, 0x102adf8ef74735a2],
    [0x40a6d0cb70c3eab1, 0x316aa24bfbdd23ae, 0xe2a54d6f1ad945b1, 0x0fe0af7858e49859],
    [0xe8a5ea7344798d22, 0x2da5f1daa9ebdefd, 0x08536a2220843f4e, 0x216f6717bbc7dedb],
    [0xf88e2e4228325161, 0x3c23b2ac773c6b3e, 0x4a3e694391918a1b, 0x1da55cc900f0d21f],
];

pub(crate) const T3_MDS: [[Limbs; 3]; 3] = [
    [
        [0xfedb68592ba8118b, 0x94be7c11ad24378b, 0xb2b70caf5c36a7b1, 0x109b7f411ba0e4c9],
        [0xd6c64543dc4903e0, 0x9314dc9fdbdeea55, 0x6ae119424fddbcbc, 0x16ed41e13bb9c0c6],
        [0x791a93b74e36736d, 0xf706ab640ceb247b, 0xf617e7dcbfe82e0d, 0x2b90bba00fca0589],
    ],
    [
        [0xd62940bcde0bd771, 0x2cc8fdd1415c3dde, 0xb9c36c764379dbca, 0x2969f27eed31a480],
        [0x29b2311687b1fe23, 0xb89d743c8c7b9640, 0x4c9871c832963dc1, 0x2e2419f9ec02ec39],
        [0xc8aacc55a0f89bfa, 0x148d4e109f5fb065, 0x97315876690f053d, 0x101071f0032379b6],
    ],
    [
        [0x326244ee65a1b1a7, 0xe6cd79e28c5b3753, 0x0d5f9e654638065c, 0x143021ec686a3f33],
        [0xb16cdfabc8ee2911, 0xd057e12e58e7d7b6, 0x82a70eff08a6fd99, 0x176cc029695ad025],
        [0x73279cd71d25d5e0, 0xa644470307043f77, 0x17ba7fee3802593f, 0x19a3fc0a56702bf4],
    ],
];

pub(crate) const T4_ROUND_CONSTANTS: [Limbs; 256] = [
    [0x8b0878e269ed23e5, 0x02bb86744edc2623, 0x48da1d39bd5e4a43, 0x19b849f69450b068],
    [0xad47f80c8dcf34d6, 0x20eb2cc7450acc1d, 0x7239347b758f0a13, 0x265ddfe127dd51bd],
    [0x3dfc36bab497d8aa, 0x4108ac845015c2aa, 0xe0f66a545e1e5162, 0x199750ec472f1809],
    [0xd032f787c7f1cdf8, 0x4d743ea25067f0ff, 0x110f06a5f74302b1, 0x157ff3fe65ac7208],
    [0xfe18f4896ac94902, 0x0b15c590692f8bee, 0x5fd35ac45fca33f1, 0x2e49c43c4569dd9c],
    [0x2731345ffa2d1f1e, 0xcb2f0b6973c24fa8, 0x0d4aef2b6d6506c3, 0x0e35fb8998189052],
    [0xc6fe723002e0b996, 0xa9d9e7806d667ffe, 0x05f109ae5e944f1b, 0x251ad47cb15c4f11],
    [0x563fa39d9c22df4e, 0xf8beb56fdd05e5f3, 0x9873e97160234641, 0x13da07dc64d42836],
    [0x46e7b89055fd4738, 0xa553939689d350cd, 0x3dc00c7dccef7483, 0x0c009b84e650e6d2],
    [0x203dec74befdca06, 0x04eb650c6d535eb0, 0x01992e3956f42d8b, 0x011f16b1c63a854f],
    [0x85df07093f367549, 0x2f3f78d0467ad454, 0x209d9a561daa7961, 0x0ed69e5e383a688f],
    [0x463672264c9f789b, 0x3aec507f5eb3d33f, 0x21acad41472b6bbe, 0x04dba94a7b0ce9e2],
    [0xce732ff1d4fa28e8, 0x6036757d4bb50bf7, 0x6eb094271c9d237b, 0x0a3f2637d840f3a1],
    [0xe54a485d1182323f, 0x39b1f075569564b6, 0x8f8a1c502fdb38fa, 0x259a666f129eea19],
    [0x7a32fdf7ede0d6a1, 0x7745d4271038e515, 0xd8e7d06a4ee3a47f, 0x28bf7459c9b2f4c6],
    [0xec91bd6941432447, 0xc37c85bbcce6a2ae, 0x26ea200f489be8d4, 0x0a1ca941f0570375],
    [0xb43a26fd926361cf, 0x5535ed1539f051dc, 0x53d7fd4fc5451285, 0x0c6f8f958be0e930],
    [0x84dd57e69caaf811, 0xa9e8a00708e296e0, 0xd426e8128ac9d90a, 0x123106a93cd17578],
    [0x7b074867cd2dee75, 0x5e8fa83ff1e8f187, 0x7dd3ab52f8e84008, 0x26e1ba52ad9285d9],
    [0x4471537e6a4ae2c5, 0xbe4d8b7bf9e09586, 0x18a64c5c47b9c97c, 0x1cb55cad7bd133de],
    [0x7143f08e6e9055d0, 0x2a53043d5060a41c, 0x0e2c7ce04bde7f6d, 0x1dcd73e46acd8f8e],
    [0xb12b9bb4512e5574, 0x0cda294a0eb4e9b9, 0xf5852f05474a4def, 0x011003e32f6d9c66],
    [0xd7c508dd2287ae8c, 0xbadfe5903f58bafe, 0x9ad5f20d03a57dfe, 0x2b1e809ac1d10ab2],
    [0xeaa69ae87bcec0a5, 0xef995d05ab2fc5fa, 0x9fb4dac35ee17ed0, 0x2539de1785b73599],
    [0x43982cb11d77951d, 0xf4e1c3d41c86d46e, 0x26497f222b3e0a0e, 0x0c246c5a2ef8ee01],
    [0x3f0305f5d03b527b, 0xbb09e6a6ad1a1c2f, 0x5408148f7c0632ed, 0x192089c4974f68e9],
    [0x6d8fdc2fb5a60d85, 0x8529097d91096b75, 0x6a0ee36eeb0d0c05, 0x1eae0ad8ab68b2f0],
    [0x9768bd98c5d06bfb, 0xdb6e2fdc0dee99e6, 0xe46f8282872abc88, 0x179190e5d0e22179],
    [0x6cafe794a9b3cd1c, 0x14528f7db00f31bf, 0x76e9a81c7ac4b832, 0x29bb9e2c90767325],
    [0xb10e590e6e691e08, 0x52652645882aac35, 0x403efd0c2464a90d, 0x225d394e42207599],
    [0xe09efd454b23fd59, 0x2be13557451c087d, 0x753d238055b44453, 0x064760623c25c8cf],
    [0x922910a78f6b5b87, 0x4d67f4bf42a75c10, 0x7f301c4b716d8a39, 0x10ba3a0e01df92e8],
    [0x361b77693f21471c, 0xcb511bc0c242eb9d, 0x4f9c6e96b0c2a801, 0x0e070bf53f8451b2],
    [0xa7f921014de252fb, 0xccd6cb11d2491d8a, 0xd39755ff93821a73, 0x1b94cd61b051b04d],
    [0x0487b5aa7d74070b, 0x9d4e917d5713bb05, 0xe148787a2e70230f, 0x1d7cb39bafb8c744],
    [0xbb74ac1f303b17db, 0x8785c2961829f701, 0x9117d0fe980c80ff, 0x2ec93189bd1ab4f6],
    [0x82ea46bd83517926, 0xeac404a19ae07a90, 0xa692bb825b86275b, 0x2db366bfdd36d277],
    [0xdc99cec6960711b8, 0x985275428450359a, 0x69655cf186a68532, 0x062100eb485db062],
    [0x00c567bf41f5a59b, 0x20243f92fa59e4f9, 0x570e7f1e8244ca11, 0x0761d33c66614aaa],
    [0xf7a72e494855ad0d, 0x5d78608a0f7de4cc, 0x2c2705aa034e3f31, 0x20fc411a114d1399],
    [0xc3a30f317250bc5a, 0x102c67e8b3effb5f, 0xadd9ec4e9ab219ba, 0x25b5c004a4bdfcb5],
    [0xd87e7dff62b37f4b, 0x038b186d8474155a, 0xa494e58f6df6f5ed, 0x23b1822d278ed632],
    [0x16102a29cc2f69e0, 0x0f14d13bfcfcccaa, 0x606c4ba9012499bf, 0x22734b4c5c3f9493],
    [0x54413d3fad795ce5, 0xe5bdff409aa36102, 0xe27a74dc33492347, 0x26c0c8fe09eb30b7],
    [0xbbd626df348ccad9, 0x196be3083a809829, 0xe88eac03fa1fbb26, 0x070dd0ccb6bd7bba],
    [0x6067c4ebfd4250da, 0xc2c0a6de46d8c5ad, 0xb043ba78bb28c3be, 0x12b6595bdb329b6f],
    [0x5e33d95bb7e8d729, 0xc06fca9b275c671c, 0x3bec30e7a5876c11, 0x248d97d7f76283d6],
    [0x106d15d9bd9baaaa, 0x8b45eb759ddde4aa, 0x16fc6fd64cc93931, 0x1a306d439d463b08],
    [0x0d62d3d6ec7c56cf, 0xf4f1b54ddc27821b, 0xced7c00421cb4621, 0x28a8f8372e3c38da],
    [0xbc852183e1e2ce7e, 0x071ce320c829f388, 0xbb35152f24d43294, 0x0094975717f9a8a8],
    [0xf4103246db2e8d65, 0x593f74d4f653ae83, 0x80fde60d716480d3, 0x04d5ee4c3aa78f7d],
    [0xd08495c12efde187, 0xc7bef54b8822cc76, 0x6349ad6fb8ed2269, 0x2a6cf5e9aa03d433],
    [0xbaae48d7efcba3f3, 0xf792180808fd6e43, 0x9274da43e19ddeb7, 0x2304d31eaab960ba],
    [0xe1c11d39d199f0b0, 0xbff08a7e0726fcb4, 0xd5e7009785817249, 0x03fd9ac865a4b2a6],
    [0x3f7954d4d63b0b64, 0x798afc3a20919307, 0x2248404d55ee5044, 0x00b7258ded52bbda],
    [0x6272c5ca65e92d9a, 0xb13d3a74f3298db3, 0xec38fca2d4bf65eb, 0x159f81ada0771799],
    [0x71e144cf4264431f, 0x9000130ea25f0c54, 0x50237a75bc28e3bb, 0x1ef90e67437fbc85],
    [0x95a79ed82932e30d, 0x8df739bc176b08ec, 0x196b49aa41a2d256, 0x1e65f838515e5ff0],
    [0x6575c1068c94c33f, 0xb18c844e570e1f82, 0xec6ce768d079ba74, 0x2b1b045def3a166c],
    [0xf1c6e07c168bb173, 0x65dc2d73bef715e3, 0x402543b1109229c1, 0x0832e5753ceb0ff6],
    [0xc5a8e3c390b6ad16, 0xb1b841c2e8b6451b, 0x6b762ae0a37d41ba, 0x02f614e9cedfb3dc],
    [0x0f6a0be27e7ed705, 0x7370ebb777bedff4, 0xdd640b8e362cad96, 0x0e2427d38bd46a60],
    [0x0768bbe29214a53a, 0x049f0ec098c3c7c5, 0xeb7c84d414e7ce79, 0x0493630b7c670b6d],
    [0x3dc06cc85327cea9, 0x6bb1515355d5461a, 0x4decdab17066c5a2, 0x22ead100e8e48267],
    [0xe5084e0b6d2a6f16, 0x583f1ae35626d04d, 0xaae2626ed2554d48, 0x25b3e56e655b42cd],
    [0x4b4fdc0a0cf6f9d0, 0xb599c336349e4c58, 0x5837a6cde8ff13db, 0x1e32752ada8836ef],
    [0x72a9864074d412e5, 0x23c00995f05078f6, 0xc50f68f6f3c3455b, 0x2fa2a871c15a387c],
    [0xcd18e7c7a7d83505, 0x54ccbf10661bab7f, 0x278e1db7311e889f, 0x2f569b8a9a4424c9],
    [0x44165374b246b43d, 0xa7df93f7332ffd21, 0x531ade530234c518, 0x044cb455110a8fdd],
    [0x78ddc723a5319025, 0x91fe8c90adfe1181, 0x420246157f2e42b1, 0x227808de93906d5d],
    [0x8579d2e7a6800355, 0x5d03781ae090ad4a, 0x623adead87357986, 0x02fcca2934e046bc],
    [0xcbec2e060d8befac, 0xbad3f3c5ab91a8dd, 0x6abccceb344a1d36, 0x0ef915f0ac120b87],
    [0xf3b16ef2b1405d38, 0xab0fb85f6be63b09, 0x77eb757bc6f287f6, 0x1797130f4b7a3e17],
    [0x36c668555decc6e5, 0x8c7f497c20156d4d, 0x3306c85abab59e60, 0x0a76225dc04170ae],
    [0x96174b5326a31a5c, 0xf8fa76d48acb6647, 0xa1e77a7b93209af6, 0x1fffb9ec1992d66b],
    [0x0611889b797b9c5f, 0x5f8fbba6c6b9c609, 0x53b57c338fa538d8, 0x25721c4fc15a3f28],
    [0xeb63b982bfcaf75a, 0xadb4c3790705da95, 0x215e3d07ba197216, 0x0c817fd42d5f7a41],
    [0x2bc15866e52b5a96, 0xdf8cf86ce00a2200, 0x9f7e13c2c24970b6, 0x13abe3f5239915d3],
    [0x92cd60acb4d391ce, 0x5c1bc3dc29bdbd7a, 0x12ef7f39987a46c8, 0x2106feea546224ea],
    [0x57e1b3345bb0f959, 0xf1ca5a28c748bc71, 0xaaa79474a37dab49, 0x21ca859468a746b6],
    [0x8f1a48999e34185b, 0x2911d14d0321662a, 0x5cf1f0df934194c6, 0x05ccd6255c1e6f0c],
    [0xea28678cb09490a4, 0x16c4fb267fe44fe6, 0xe464d846674c4c88, 0x0f0e34a64b70a626],
    [0x8f5b1a8a2de0d4bf, 0x47dbfcfe350d6483, 0x6157794ca36d0e96, 0x0558531a4e25470c],
    [0xb72f5864961f1455, 0x924cadad3f655a60, 0xceea125157683d18, 0x09d3dca9173ed2fa],
    [0x17d4c722e5bd4335, 0xf23f92d68aaec486, 0x493f866ed03d218b, 0x0328cbd54e8c0913],
    [0xee3347dd5329d34b, 0xe79e7bcc9798c648, 0x23a487b1a7094e07, 0x2bf07216e2aff0a2],
    [0x111e11a63fe412df, 0xd6f78ed6a6dffc82, 0x6499c583cb76c316, 0x1daf345a58006b73],
    [0x391e6f2293d2c404, 0x1ef39039b2edc7ff, 0x46b694c60e182361, 0x176563472456aaa7],
    [0xfb0225035bd3f8db, 0xca964d2b7d1083d4, 0xa3bb5e47d7e33538, 0x2ef1e0fad9f08e87],
    [0x1779ed36c817ae2a, 0x9c1803dec5ae8f0a, 0x17b2b1f57c731017, 0x226c9b1af95babcf],
    [0x35734eb5d4ad0def, 0xf8148c89f13fb35d, 0x28126b4c3a15ae0f, 0x14bce3549cc3db74],
    [0xe550cfd4034212c7, 0xb8e923d301f372f8, 0x742c3373f2635b48, 0x2debff156e276bb5],
    [0xd7d0432d1d4760c7, 0x41afe1b6b29c47ad, 0xfc2395b22e356b64, 0x2d4083cf5a87f5b6],
    [0x9c317c53d7161c29, 0x91bf79a10c0184d8, 0x34b911262fdc9c1b, 0x0c225b7bcd04bf9c],
    [0x7b835265f9c9c8f3, 0x99aa0200db66d5aa, 0xc33a79bfac91a02c, 0x03152169d4f3d06e],
    [0x7afe8b7aa7d3199c, 0xddc8f51bfdfebbb8, 0xb05974587486d58b, 0x0b61811a9210be78],
    [0x046d637a533b6f78, 0xb8ae48acf7048f16, 0xf7eba6a5c5921878, 0x203e000cad298daa],
    [0x0757143d1bfa9146, 0xba7ee386fda1112c, 0x376672b69f6c9655, 0x1a44bf0937c722d1],
    [0x002f59c5611d4daa, 0xb8e0fde75a2106d7, 0x3500afec1a1f56ac, 0x0376b4fae08cb03d],
    [0x3d553ef363182185, 0xd6fc241d3214177f, 0x65a2171250fdfc32, 0x00780af2ca1cad64],
    [0xe9d857079bdc31d5, 0xb75dbe18d5221c87, 0xeb808bedfd72a8d9, 0x10774d9ab80c25bd],
    [0xb56821fd19d3b6e8, 0x0d03f98929ca1d7f, 0x04b1e03b4bd9490c, 0x10dc6e9c006ea38b],
    [0x70067d00141cac16, 0xb21f75bb60e35961, 0xb2c7645a50392798, 0x00544b8338791518],
    [0x13bc534433ee428c, 0x52e105a3b8fa8526, 0x2e2e82eb122789e3, 0x222c01175718386f],
    [0x151a1430f608e3c5, 0xb77f7bdb7f7e2b46, 0x59cfb8811b1e0f45, 0x2840d045e9bc22b2],
    [0x508e01fa5860186b, 0x04554574c2990196, 0x009c937e468c335b, 0x062752f86eebe11a],
    [0x55a8e83eaaf04746, 0x1c9950c12a80bc0a, 0x87adb87c20a478a7, 0x06041bdac48205ac],
    [0x2b1dcbbf51f5000d, 0x2c7a2ae092f308d8, 0xff900a368949b002, 0x04a533f236c422d1],
    [0x4bde50a2b2d05b2a, 0xfe066d1e7dc33df0, 0x11d6a955b3d4f25d, 0x13e31d7a67232fd8],
    [0x2f79905bb13920f1, 0x9279d1648ff2c95d, 0xfbc13d6357e8599a, 0x011c2683ae91eb4d],
    [0xa1ecaed015aaf6ae, 0xd56c928e3e2c2bd0, 0x25b1a270e0b4cba5, 0x0b0d219346b85745],
    [0xd84c7a726b5f1364, 0xb65080781ef9fd13, 0x70291ee638690209, 0x14abdec8db9c6dc9],
    [0x988d0376610be106, 0x01eb12202ef47ced, 0xfcd32aa3d2664788, 0x1a0b70b4b26fdc28],
    [0x2704882e7278b607, 0x6401deb2ef99c4d1, 0x7b6943f9804e7fe5, 0x278543721f96d130],
    [0xa36535e011d58259, 0x3f0738a325638d8b, 0x57866214dbd1473f, 0x16eb59494a9776cf],
    [0x41c3479dcf8c644a, 0x9a9e53eeab6b7f8c, 0x4f240088fa5524c6, 0x2567a658a81ffb44],
    [0xb882ade840bb13d8, 0xab78e0215a5715a6, 0xa7ab39f1abd9cf77, 0x29aa1d7c151e9ad0],
    [0xe206b91f99f2c984, 0x6a4f017f9a85388c, 0xd4bbfce2b3641500, 0x15c091233e60efe0],
    [0xeb679a8115f014cf, 0xe7673ad5f1915f9f, 0x0882c2c999558d77, 0x16bd7d22ff858e5e],
    [0xffe6769250042025, 0xc0182d9b668b8e08, 0xb2c2e13ed6ef4074, 0x02db50480a07be0e],
    [0x13ba866343b73119, 0x86330ef2bf7adb4c, 0x7b6806ec9d6cdba1, 0x05e4a220e6a3bc9f],
    [0x104d37f1cbcf7a42, 0xb5f70bc424d39fa4, 0x98cbf2a5ee3b50e8, 0x1dda05ebc30170bc],
    [0xcd301f22b0de8990, 0x91da214414d89ba5, 0xf645b6fee3667f3c, 0x0184bef721888187],
    [0xad1a6d64341b78ec, 0x37414b84494e1577, 0x5f5e8276f62aef1c, 0x1498a307e6890006],
    [0xfe33548ad46bd49d, 0xcef737b8fab1f864, 0xf4939800b9d2c3ea, 0x25f40f82b31dacc4],
    [0xcb1ff31ce5bb9650, 0xe83056ce4907bfbb, 0x3f6f5862a30d2ea9, 0x09d317cc67025194],
    [0x29b913b6cf3149d0, 0xa41132cd467a86ab, 0x3ba4ce4a4c1b3bd0, 0x2f77d77786d979b2],
    [0x52f89e785f729bbf, 0x1bbd336963f254c1, 0x73dc266b6fccc684, 0x0f53dafd535a9f44],
    [0xde96de85deef2fa2, 0x0e6976e1c00baf16, 0x65c3a099e17526fa, 0x25c1fd72e2230452],
    [0x893e65d6ce4a8f62, 0x41af95c84eaea3cf, 0xe368d385d52d16be, 0x2a902c8980c17faa],
    [0x5527405762f83529, 0x6676dd114d1dc8d2, 0x02878c8976b82be9, 0x1ce1580a3452ecf3],
    [0x2fc50f7f0f4d0056, 0x01c5ec569609034d, 0xa49a1fa306df0088, 0x24a6073f91addc33],
    [0x7f256c68b0be2b74, 0x83e07ca554b5d157, 0x9fc27fe306d71d45, 0x25e52dbd6124530d],
    [0x6796e5b6cd70f15d, 0x5974be4d0a7b2994, 0x93468dbccfb02985, 0x23dffae3c423fa7a],
    [0x99591bc9924ed6f5, 0x80615d50be36243a, 0x49b77594f6b027c4, 0x06342da370cc0d8c],
    [0xcc7df0d8e9f63925, 0x4778303d0405c1b4, 0xb75f09f115fc751b, 0x2754114281286546],
    [0xb59ee197f8187cf5, 0xabf214153833d7bd, 0x862c2bc1d119edde, 0x15c19e8534c5c1a8],
    [0x79b4b3d2d77d5f3e, 0x366f3be0a8210616, 0xb4c78d0d9ef3cabe, 0x265fe062766d08fa],
    [0x8debfd098d3ec7be, 0xd377ac5cd0146f04, 0xf22cb7cd0ac3a327, 0x13ccf689d67a3ec9],
    [0x9fbccca4524aaebd, 0xd92a5e05bdf3fe6b, 0xf81cd3974827a887, 0x17662f7456789739],
    [0xe809fd624be7ad5d, 0x82ca6a5cca70cee4, 0xef18631e515f7f2f, 0x21b29c76329b31c8],
    [0x939eb17b01fa975c, 0x9c06738165215319, 0x441eb97fe2790198, 0x18137478382aadba],
    [0x39ceec4668f37e88, 0xd34f761935ffd3b7, 0xdc724f5fef2b37c2, 0x2bc07ea2bfad68e8],
    [0x0e602077aef9a03e, 0xb4173203c2bd94ad, 0x563840480df993fe, 0x2ddb2e376f54d64a],
    [0x8adb25373596c3f7, 0xe8a20f8d72f61370, 0x06b41cb24c602609, 0x277eb50f2baa7061],
    [0xbb7f87734c9a1fe5, 0xb33fc4b450c0db50, 0x9d0c620904f01a56, 0x0d4de47e1aba3426],
    [0xae908d0279a29f0c, 0x9f445697058f134a, 0x428673b6bd3eea6f, 0x0b8442bfe9e4a1b4],
    [0x74247fddb720f8f5, 0x26e186a65945e965, 0x6e06930cb89f7d4a, 0x11fe5b18fbbea1a8],
    [0x170e4ad89c33a0d6, 0xdf5b774dcad4d883, 0x4d25d8f6d9f90021, 0x224026f6dfaf71e2],
    [0x1bc9f9c62bbeb824, 0xa96bc9e37d1091f6, 0xe0704dad58d03465, 0x0b2ca6a999fe6887],
    [0xa1a7e0c96529f421, 0x1d0a4ce41d364797, 0xd40c54053a28a06b, 0x221b63d66f0b45f9],
    [0xdce2f4836bb84ad4, 0x7493bce64d4d24ae, 0x3d4120801b047d08, 0x30185c48b7b2f1d5],
    [0xf8267318632a61f0, 0x533356f0faa48f27, 0xa989e223056227d3, 0x23f5d372a3f0e3cb],
    [0x8e6dfbe4328f3e3b, 0x88e1e0090d06162e, 0x1bf8235ea162b1f3, 0x2716683b32c755fd],
    [0xc930c69748d5d4bc, 0x3d140770c80ac67d, 0x04ca1d853ec0909e, 0x0977545836866fa2],
    [0xe81c43c0f9434b31, 0x5f51682d31472b05, 0x025d91ab4982dd42, 0x1444e8f592bdbfd8],
    [0xa00f874e7718fbe3, 0xbe3ffbfe583f7012, 0xbeb74a1c5cb8fee8, 0x26e04b65e9ca8270],
    [0xdf69816fb1a914d2, 0x00f48f4febe29ad6, 0x34ee47a5cd9f8698, 0x22a5c2fa860d11fe],
    [0x9f7474dd44c5c8d7, 0x7ec338f3a0964c62, 0x6afd672a738f4273, 0x174b54d9907d8f5c],
    [0xd56c871907b39b87, 0x8d2189b87c8c8143, 0x1168fa66694cf280, 0x1db1db8aa45283f3],
    [0x387341d813d1bfd1, 0x6f65faf8cce0ab66, 0x9030b8c7b7dfde12, 0x1530bf0f46527e88],
    [0x89330a2f2bade457, 0x36ead9edc8f28148, 0x9f01c1cec8760e99, 0x0b73f613993229f5],
    [0x7bd2dc0f36bcf41e, 0x587ab977fc822778, 0x4552aaea377f448d, 0x29c25a22fe216460],
    [0x77df57d77c875526, 0x7abe82795dc272b3, 0x8503da66c92cf407, 0x2b30d53ed1759bfb],
    [0xcf5f0a2916787cd2, 0x756c08c85ede7227, 0x7b7b7e69359d53a2, 0x12f6d703b5702aab],
    [0x1ffa9ac706364113, 0x55ad01071028d484, 0x61a40a0b8837293a, 0x2520e18300afda3f],
    [0xc68f09fa03b8b95f, 0xac9bc59278277393, 0xdda8ed4f346fa967, 0x1ec9daea860971ec],
    [0x08aae24b830ad725, 0x83bf5cbf70ed407c, 0x432f5cd5bef8fe44, 0x0a99b3e178db2e2e],
    [0x317abad7c5778492, 0x07ee0abac3c817a1, 0x086b89b601c2bbe4, 0x07cda9e63db6e39f],
    [0x5d48aab38f8fc3a3, 0x49bd8290963203b3, 0x52d571b191bb0adb, 0x08c9c65a4f955e89],
    [0x3801c9c17bdd9c9e, 0x9af54a2a3f2719d3, 0x49590ddbfbd709ed, 0x2737f8ce1d5a67b3],
    [0xa9f179ba627f7d6a, 0x909432bd0c129813, 0xd28770072798e8b7, 0x1049a6c65ff019f0],
    [0x60a5122361daeddb, 0xde8868944fdf64ee, 0xc0ea5a9beb27cecb, 0x18b4fe968732c462],
    [0xa4f7473483885d19, 0xa6f478cfcf11f1b2, 0x440b2eaeeefa8c02, 0x2ff2b6fd22df49d2],
    [0x8a1b352f5cef42ff, 0xe8be4057cbd8dbd1, 0xe56c789b8f6bbcb3, 0x2ec5f2f1928fe932],
    [0x08c1d100378e545e, 0x424a4c6a7794ee3f, 0xe33ad9f75bf3426d, 0x265a5eccd8b92975],
    [0x20517da1dfd4279c, 0x778e656cfcb366bf, 0x9d6242bb5ada0e68, 0x2405eaa4c0bde112],
    [0x76dd98a2dbf60417, 0xfdb51955d8b2d66b, 0x88018004cbbf2bc5, 0x094c97d8c194c42e],
    [0x330c9625c2afe0b8, 0x508b705221e6a686, 0x22b9979a605bf64d, 0x2c30d5f33bb32c5c],
    [0x6aa2fc716fdb6cf5, 0x4886ea583e87299e, 0x25d01cc6dcb1622d, 0x01a75666f6241f68],
    [0xf47bf2e87d382fcb, 0x6d359ab9a66979fc, 0x4d12ac091e87be7c, 0x0a3290e8398113ea],
    [0xecd21bf69aa0cc74, 0xc31219d8fa0dfc75, 0xfeb38461425bb0d8, 0x154ade9ca36e268d],
    [0x13a4b5095d028772, 0x99231ef5dc69d8dc, 0x1b172d79c6f22eee, 0x27aa8d3e25380c0b],
    [0x9d395bbcbd806461, 0x56bbdf485afa1f54, 0x1a8b2e3bca6099d7, 0x2cf4051e6cab4830],
    [0xb0843d7f84b23e71, 0x5131feab8afa5eeb, 0x1d3f517ddff9f201, 0x301e70f729f3c94b],
    [0x17a8d7a4c91f83bc, 0x32dc4cef113ae60d, 0x8b4d9620347ab023, 0x298beb64f812d25d],
    [0xcf11a3f02e46aa95, 0xd1c14a15b221680a, 0x4d03fd291c3c471e, 0x1b362e72a5f847f8],
    [0xbc1d9ba41dc1c737, 0xaa1ef6e78e1e5ebc, 0x75432902999223d5, 0x0dc8a2146110c0b3],
    [0x08afa1eb922ff279, 0xcb21729a72ddc03a, 0x05dc93092cb69778, 0x0a48663b34ce5e1c],
    [0x545bb314881098ee, 0x0fe46f143b702d74, 0x6096b64a82f9e95f, 0x0a87391fb1cd8cdf],
    [0x82ba8a2a0892fd5d, 0x8826edd7ea9c29f3, 0xf0512ff8e6ca362f, 0x1b5b2946f7c28975],
    [0xb4eac1f533315b6b, 0x173a8bbcb8a5b987, 0x47ebe2239219bc6a, 0x01001cf512ac241d],
    [0xc72beb17d8358a32, 0x7ac093d3fb5f5feb, 0xf704fa7d7693da72, 0x2fd977c70f645db4],
    [0x9be763a97793a9c4, 0x761d5355c05444d9, 0xc2d7cc688164f39e, 0x23c0039a3fab4ad3],
    [0x9f27f22ff03fa25d, 0xaec356cf435888e7, 0x2c9c0df6161eaac1, 0x19d43ee0c6081c05],
    [0x919f9d5ca1cefe59, 0x8bf29b646d020830, 0xfddccffd94a56302, 0x2d9b10c2f2e7ac1a],
    [0xdae2f2b9f83e4267, 0x2799283e166fc81c, 0xc47e4aff5a66f5ce, 0x2457ca6c2f2aa30e],
    [0x044dfb54a7c10b35, 0x811ee8676ed6f0c3, 0x5820592445094022, 0x0abc392fe85eda85],
    [0x1d2c2bc30eac1eb0, 0x1161ac3993acf310, 0x0cebcd37f3ea54f3, 0x19d2cc5ca549d1d4],
    [0xa3d3ab546e98c9c8, 0x3ee0e4ec041ba644, 0x08aafb26ae13cd39, 0x0f97ae3033ffa016],
    [0x8a166496e88cfeca, 0xfa15537ea4e168e8, 0x260e404cf1d427a7, 0x16dbc78fd28b7fb8],
    [0x1827820366d5e07b, 0xef8344e576f8ad3d, 0x16f085f73bc4f22e, 0x240faf28f11499b9],
    [0x46f8cab58d9ef1af, 0xeaba808c8fdb6dbf, 0xfe6c8531e55e1770, 0x0a1bb075aa37ff0c],
    [0xc4a705a7ce089f4d, 0x38d5b085ac1042fd, 0xa6a853aaf3a644ca, 0x2e47e15ea4a47ff1],
    [0x5fb14528375772b6, 0x673ab059935f4df3, 0x860ca4a9c09d39e1, 0x166e5bf073378348],
    [0xed10f96538f0916f, 0x0cacccd027233001, 0xaf235902f057a274, 0x18b42d7ffdd2ea4f],
    [0x21deab1051c37702, 0x4fc368020b3ed382, 0x4914788e3e3c7ead, 0x089cb1b032238f5e],
    [0xd9e70863451dd8d1, 0x89f9339c7b971921, 0xaf7c7076dd165adf, 0x242acd3eb3a2f72b],
    [0x74af860457245c3b, 0xeac9a068283f3264, 0xbf47f2bd82fce896, 0x174fbb104a4ee302],
    [0x780c275fe1116c6b, 0x2891fb2bb318613f, 0x61f3058ce092c67d, 0x17340e71d96f466d],
    [0xa2fd380c4df7f6b2, 0xf098b9f8fd455953, 0xf00f2e383982d024, 0x1e8e40ac853b7d42],
    [0xbf40f92938e2e961, 0x5198c55cad66e8a9, 0xe1d4d5e284b8d107, 0x0529898dc0649907],
    [0xf65f21c4d4e5df8f, 0xe8c77aa017ee1d7b, 0xbf7de5bb797364dc, 0x2162754db0baa030],
    [0x21bef44741752ec6, 0xa9f9291efbde4c84, 0x3ceb250ae00c58c2, 0x12c7553698c4bf6f],
    [0x9cb723136526508e, 0xa733c93353e9d9c7, 0xfcb8c5279313bd51, 0x292643e3ba2026af],
    [0x1db6e74d5b87d158, 0xb6c07c5d98e66ff7, 0x1d52951bea990bd5, 0x00ccf13e0cb6f9d8],
    [0xb0f86c15ab645b4b, 0xb6723873cb30fc22, 0xdd654128cf2f3aaa, 0x185d1e20e23b0917],
    [0x13fe53f8d8764e1f, 0x6778e3de0f024c0f, 0x742bdf11c60efa18, 0x14c61c836d55d3df],
    [0xd03ee1195d72449e, 0x2919e2af53008184, 0xe5dbe4680457691c, 0x0f356841b3f556fc],
    [0x0c0a6b6e8fa5b3e8, 0x83143374fd2080ba, 0x5df124f887bf40b3, 0x1b8fd9ff39714e07],
    [0xe9103418796f6024, 0xfc3c8ae04e9df0b3, 0xa3f873924e2aaa14, 0x0e86a8c2009c140c],
    [0xb0861421e79155c8, 0x373fc43820ca2b16, 0x0e5462ad932fcdd2, 0x2e6c5e898f554777],
    [0x2ce5fd5a0c014604, 0xff9fe1a0ecd37797, 0x7c14f9d1df032bc9, 0x05d797f1ab364723],
    [0xca8929851da8c008, 0x1daf2dcd65519ef5, 0x6c3d152875981d0c, 0x29a3110463a5aae7],
    [0x4b732f8163883314, 0xdc71640a8bbd1f86, 0x73c3a4b91c05354c, 0x2974da7bc0743222],
    [0xcce9c522889b47dc, 0xa29cb91aa082c8bf, 0xb2a30621c05eb12c, 0x1ed0fb06699ba249],
    [0xd80c8ae36e40fe9b, 0xae29e8c572eca912, 0x654ff26d8d863fee, 0x1c793ef0dcc51123],
    [0xfbb4a8770977dc2f, 0x8c91e82589a78169, 0x7956257d3d234ef1, 0x1e6aac1c6d3dd315],
    [0x8fcda33256fb6bf5, 0xd037748080a47d94, 0xe6273dd6fa98b25e, 0x1a20ada7576234ee],
    [0x35d49306728af96c, 0x642d772045ece513, 0xfc7a9a23a6fd9996, 0x191033d6d85ceaa6],
    [0x32ef481f5d06297b, 0xc76f200b3740b8b2, 0x3a825aa6fddc3abf, 0x006e5979da7e7ef5],
    [0x1eff8c0174cdb06d, 0xfbd57f596c8f2983, 0xbef3e68d417e9fa0, 0x0b0d7e69c651910b],
    [0x2c4b20a25c9cdf9d, 0x4ac46dbbb033c511, 0x16435ec084e2ecd4, 0x25caf5b0c1b93bc5],
    [0x085b2f150f72472a, 0xf7f77442d62fd4c8, 0x9af8b796d9645872, 0x12c1ea892cc31e0d],
    [0x1de6dadc78c32aae, 0xe5a929d9f928b9b8, 0xb8bbe3afeb245fee, 0x16af29695157aba9],
    [0x68d31084256b67dc, 0x705b87ec5a4cfdc1, 0xd687fb2f3be18691, 0x0136df457c80588d],
    [0xb95a285060e7b089, 0x9e07b1efbc74434d, 0x6aea984fba6e7147, 0x1639a28c5b4c8116],
    [0x7e232bd9b5ca9b76, 0x816c28b700bdc50f, 0x13f8e650f587ec06, 0x03d62fbf82fd1d43],
    [0x249830de1edfde54, 0xf77a1e40fc6da97c, 0xb4d14aaddca3cfe2, 0x11aeeb527dc8ce44],
    [0x642b645807bfc824, 0x6a670e6bc68c7a49, 0x79c5e6138c6c8ee3, 0x13f9b9a412741294],
    [0x506cae8b7ebcd15b, 0x5ddeeed7a939440c, 0xc8484cd26c7c1f63, 0x0e4772fa3d75179d],
    [0x39fc46a68c5d4db4, 0xb5971752067a612b, 0xde4bdec58febe8d8, 0x1b39a00cbc81e427],
    [0x444d1c0a3a25707e, 0xf66463c2eb54a245, 0x71e16e2953f48731, 0x2bedb66e1ad5a1d5],
    [0x7379ce35da915dec, 0xb08b193b608582a2, 0x8abd068f06a7287f, 0x2cf0a09a55ca93af],
    [0x753c8fb863efb387, 0x7d1a512050ba7db0, 0x88830cabfef2f8d2, 0x2d1bd78fa90e77aa],
    [0x630d7fd283dc3394, 0xf7c0d49c1387062e, 0xf423d3071eb83539, 0x065610c6f4f92491],
    [0x642fb464bd607368, 0xcc5f9969033f15ec, 0x5013b12873452beb, 0x2d933ff19217a554],
    [0x3c49c8aa99e0258b, 0x00dae5354e79508c, 0xf76b92b3e13b30d5, 0x1aa9d3fe4c644910],
    [0x78cea1f1c8450bdd, 0x27095fa773e1aca0, 0xc748638c59111c6b, 0x027ef04869e482b1],
    [0x02e3fa136ad0b8fb, 0x9f67a2605d9ec038, 0x15db4e00668a8c44, 0x2b7d524c5172cbbb],
    [0x3f7c3c1dd735db0f, 0x4693ae25b1e55df1, 0x7c8718d86747c7f7, 0x0c7c382443c6aa78],
    [0xa627dcdd9bd79078, 0x7a1f43c2d30d0fe4, 0x62a7b56acf4f7620, 0x00b4567186bc3f7c],
    [0x0337490883db4fd5, 0xb07fe739e4c1e61d, 0xe6d61737fe08b47f, 0x1e41fc29b825454f],
    [0x002ae8d3ba0653b6, 0x21e1af872d8c0e89, 0x72ee6dafc6165844, 0x12507cd556b7bbcc],
    [0xd77d3e97f71cb5db, 0x97eb36617ef36fe4, 0xcef312e5e6f52a5d, 0x13d437083553006b],
    [0x4686077c6a4486d5, 0x467d90b22f0b3866, 0x687222487dda9a65, 0x163ec73251f85443],
];

pub(crate) const T4_MDS: [[Limbs; 4]; 4] = [
    [
        [0x87947223ae5108ad, 0xe5e39942296127fd, 0x8a351dd786dd7a1d, 0x236d13393ef85cc4],
        [0x3cedc821b2a7ae19, 0x967f1dc58718e59e, 0xc4a9b194e10724eb, 0x277686494f7644bb],
        [0x84a4529e66b09c62, 0x5129c16479973b0a, 0x0b85618826a9b350, 0x023db68784e3f0cc],
        [0x7b3a75646ff382c1, 0x8af08cdbd63017c5, 0xd50d663bae733f97, 0x1d359d245f286c12],
    ],
    [
        [0xf049bc970e841a0c, 0xfe9bc7fb1f70943f, 0xb525be259699ab28, 0x2a75a171563b807d],
        [0x6f38ce4157b6770e, 0x08b4dd3e15ccc370, 0x78e2827d092e1ae8, 0x083abff5e10051f0],
        [0x68a9ff8253a1eb6f, 0x24d5c4741eab8b75, 0x7dc49cfdbae303ad, 0x1a5ad71bbbecd8a9],
        [0x790f725c5d84f0af, 0x945004a7bc2c59e8, 0x86772133640f02ce, 0x0d745fd00dd167fb],
    ],
    [
        [0xf366b3e521c4ed42, 0x497ad2eecbaa7e42, 0x592a52ca9cef820d, 0x2070679e798782ef],
        [0xb3a2be979e2d7eab, 0x06ece318cd224ab6, 0xf800739a53da75d9, 0x2e18c8570d20bf5d],
        [0xfa283c6aa723b608, 0xf2e4386d3e5b9f38, 0x7f3367ce86f684f1, 0x0fa86f0f27e4d3dd],
        [0x3f0c2491e0b403eb, 0x57035ee3da6b2ca8, 0x28168e4b14dbaeb6, 0x03f3e6fab791f166],
    ],
    [
        [0xba8b3d30958e7677, 0x8ff0613fd79375f8, 0x2488540e41f783b6, 0x2f545e578202c973],
        [0x596a15623d01476e, 0xb8104c32ba4cd701, 0xbff7eefeae3faf4b, 0x23810bf82877fc19],
        [0x207ed58d2a34cdd6, 0x1c068ef930f10be2, 0xeeafc4944034cf32, 0x014fcd5eb0be6d5b],
        [0xbb661c25d20fb52a, 0x8ba4a8b627627cc2, 0xd835eae0823e377f, 0x00c15fc3a1d5733d],
    ],
];
