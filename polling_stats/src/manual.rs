/*!

This is the long-form manual for `polling_stats` and `pollreader`.

## Input format

The input is a comma-separated text file with a header line and one poll per line:

```text
month,date,sample,harris_result,trump_result
Oct,15,1000 LV,0.5700,0.4500
Oct,16,812 RV,0.4810,0.4700
```

| column          | content                                                     |
|-----------------|-------------------------------------------------------------|
| `month`         | free text, usually the abbreviated month (`Oct`)            |
| `date`          | the day of the month, as an integer                         |
| `sample`        | the sample size and the sample type, separated by a space   |
| `harris_result` | the result of Harris, as a fraction between 0 and 1         |
| `trump_result`  | the result of Trump, as a fraction between 0 and 1          |

Notes:
- the columns are read by position. The header line is ignored, unless
  `--strict-header` is passed, in which case it must name the columns above in
  this order.
- results are fractions: `0.5700` and not `57.00`. A result outside of [0, 1]
  is rejected.
- the sample types `LV` (likely voters) and `RV` (registered voters) are the
  common ones. Any other code is accepted and kept as is.
- the polls are used in the order of the file. The dates are not checked and
  the polls are not sorted.
- a single invalid line stops the reading, and the line number is reported.

## Statistics

### Highest polling candidate

The best result of each candidate over all the polls. The candidate with the
highest of the two maxima is reported, or `EVEN` if the maxima are equal.

### Likely voter polling average

The average result of each candidate over the `LV` polls only. Another sample
type can be averaged with `--likely-voter-code`. It is an error if no poll has
this sample type.

### Polling history change

The average of the last 30 polls minus the average of the first 30 polls, for
each candidate. The window size is controlled with `--history-window`. When the
file has fewer than 60 polls, the two windows share some polls; when it has
fewer than 30 polls, both windows are the whole file and the change is zero.

## Configuration

Instead of command line flags, a JSON file can be passed with `--config`:

```json
{
  "outputSettings": {
    "title": "Presidential polls",
    "outputFile": "summary.json"
  },
  "inputFile": "polling_data.csv",
  "strictHeader": false,
  "rules": {
    "likelyVoterCode": "LV",
    "historyWindow": 30
  }
}
```

The input file and the output file are resolved relative to the directory
that contains the configuration file.

## Output

```text
Highest Polling Candidate: Harris 57.0%
Likely Voter Polling Average:
  Harris: 49.34%
  Trump: 46.04%
Polling History Change:
  Harris: +1.53%
  Trump: +2.07%
```

With `--out`, the same results are also written in JSON. A previous JSON
output can be passed with `--reference`: the program then fails if the
results differ, and prints the differences.

*/
